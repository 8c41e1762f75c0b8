//! Application layer orchestrating payments.
//!
//! `PaymentProcessor` validates a request and delegates it to the injected
//! gateway; `batch` drives a processor over a stream of requests.

pub mod batch;
pub mod processor;

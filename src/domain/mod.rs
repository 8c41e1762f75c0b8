//! Payment value types and the gateway port the processor delegates to.

pub mod payment;
pub mod ports;

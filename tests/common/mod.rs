#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use payment_processor::domain::payment::{PaymentRequest, PaymentResult, PaymentStatus};
use payment_processor::domain::ports::{GatewayError, PaymentGateway};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub enum StubResponse {
    Result(PaymentResult),
    Error(String),
}

/// A gateway that always gives the same answer and counts how often it is hit.
pub struct StubGateway {
    response: StubResponse,
    calls: Arc<AtomicUsize>,
}

impl StubGateway {
    pub fn returning(result: PaymentResult) -> Self {
        Self::with(StubResponse::Result(result))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(StubResponse::Error(message.to_string()))
    }

    fn with(response: StubResponse) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, still readable after the gateway is boxed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn charge(&self, _request: &PaymentRequest) -> Result<PaymentResult, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StubResponse::Result(result) => Ok(result.clone()),
            StubResponse::Error(message) => Err(GatewayError::msg(message.clone())),
        }
    }
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

pub fn gateway_result(transaction_id: &str, status: PaymentStatus) -> PaymentResult {
    PaymentResult {
        transaction_id: transaction_id.to_string(),
        status,
        processed_at: fixed_time(),
    }
}

pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}

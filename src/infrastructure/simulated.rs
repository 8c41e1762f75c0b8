use crate::domain::payment::{PaymentRequest, PaymentResult, PaymentStatus};
use crate::domain::ports::{GatewayError, PaymentGateway};
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// How a [`SimulatedGateway`] answers every charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayBehavior {
    /// Approve with a fresh transaction id.
    Approve,
    /// Report a `FAILED` charge.
    Decline,
    /// Fail the call itself with the given message.
    Error(String),
}

/// An in-process gateway with a fixed behaviour, for local runs and tests.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    behavior: GatewayBehavior,
}

impl SimulatedGateway {
    pub fn new(behavior: GatewayBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult, GatewayError> {
        debug!(behavior = ?self.behavior, user_id = %request.user_id, "simulated charge");

        let status = match &self.behavior {
            GatewayBehavior::Approve => PaymentStatus::Success,
            GatewayBehavior::Decline => PaymentStatus::Failed,
            GatewayBehavior::Error(message) => return Err(GatewayError::msg(message.clone())),
        };

        Ok(PaymentResult {
            transaction_id: format!("sim_txn_{}", Uuid::new_v4().simple()),
            status,
            processed_at: Utc::now(),
        })
    }
}

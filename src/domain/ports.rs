use super::payment::{PaymentRequest, PaymentResult};
use async_trait::async_trait;

/// Any failure a gateway may raise while charging. Opaque to the processor.
pub type GatewayError = anyhow::Error;

/// The external service that actually moves money.
///
/// Implementations own their transport, timeouts and retries. A declined
/// charge is reported as `Ok` with a `Failed` status; `Err` is reserved for
/// the call itself going wrong.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult, GatewayError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;

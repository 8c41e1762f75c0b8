use crate::domain::payment::{PaymentRequest, PaymentResult, PaymentStatus};
use crate::domain::ports::PaymentGatewayBox;
use crate::error::{
    AMOUNT_NOT_POSITIVE, GATEWAY_DECLINED, PaymentError, Result, USER_ID_REQUIRED,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Validates payment requests and forwards them to a gateway.
///
/// `PaymentProcessor` is bound to a single gateway for its whole lifetime and
/// keeps no other state, so one instance can serve concurrent callers behind an
/// `Arc`. Every failure path, whatever its cause, surfaces as a [`PaymentError`].
pub struct PaymentProcessor {
    gateway: PaymentGatewayBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` charging through `gateway`.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    /// Charges a payment request.
    ///
    /// Invalid requests are rejected before the gateway is called. Otherwise the
    /// gateway is called exactly once: an approved result is returned as is, a
    /// declined result or a gateway error becomes a `PaymentError`.
    #[tracing::instrument(
        name = "process_payment",
        skip_all,
        fields(
            user_id = %request.user_id,
            amount = %request.amount,
            currency = %request.currency,
        )
    )]
    pub async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        Self::validate(request).inspect_err(|e| warn!(error = %e, "payment request rejected"))?;

        debug!("charging gateway");
        let result = self.gateway.charge(request).await.map_err(|err| {
            let e = PaymentError::from_gateway(err);
            warn!(error = %e, "gateway call failed");
            e
        })?;

        match result.status {
            PaymentStatus::Success => {
                info!(transaction_id = %result.transaction_id, "payment succeeded");
                Ok(result)
            }
            PaymentStatus::Failed => {
                warn!(transaction_id = %result.transaction_id, "payment declined by gateway");
                Err(PaymentError::new(GATEWAY_DECLINED))
            }
        }
    }

    fn validate(request: &PaymentRequest) -> Result<()> {
        if request.user_id.is_empty() {
            return Err(PaymentError::new(USER_ID_REQUIRED));
        }

        if request.amount <= Decimal::ZERO {
            return Err(PaymentError::new(AMOUNT_NOT_POSITIVE));
        }

        Ok(())
    }
}

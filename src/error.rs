use thiserror::Error;

pub type Result<T, E = PaymentError> = std::result::Result<T, E>;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const USER_ID_REQUIRED: &str = "User ID is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than zero";
pub const GATEWAY_DECLINED: &str = "Payment failed at gateway";
pub const UNKNOWN_PAYMENT_ERROR: &str = "Unknown payment error";

/// The only error a caller of the payment processor ever sees.
///
/// Invalid input, gateway declines and gateway errors all collapse into this
/// one kind; the message is the distinguishing signal. A gateway error is kept
/// as the `source()` without affecting the message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct PaymentError {
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl PaymentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a failure raised by a gateway, reusing its message verbatim.
    pub fn from_gateway(err: anyhow::Error) -> Self {
        let message = err.to_string();
        let message = if message.is_empty() {
            UNKNOWN_PAYMENT_ERROR.to_string()
        } else {
            message
        };
        Self {
            message,
            source: Some(err.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised by the batch driver around the processor (input and output).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

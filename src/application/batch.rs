use super::processor::PaymentProcessor;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::error::{AppError, PaymentError};
use tracing::error;

/// A processed request paired with what the processor made of it.
#[derive(Debug)]
pub struct PaymentOutcome {
    pub request: PaymentRequest,
    pub result: Result<PaymentResult, PaymentError>,
}

/// Runs every request through `processor`, one at a time and in input order.
///
/// Requests that could not be read are logged and skipped; they produce no
/// outcome.
pub async fn process_all<I>(processor: &PaymentProcessor, requests: I) -> Vec<PaymentOutcome>
where
    I: IntoIterator<Item = Result<PaymentRequest, AppError>>,
{
    let mut outcomes = Vec::new();
    for request in requests {
        match request {
            Ok(request) => {
                let result = processor.process(&request).await;
                outcomes.push(PaymentOutcome { request, result });
            }
            Err(e) => {
                error!(error = %e, "Error reading payment request");
            }
        }
    }
    outcomes
}

use crate::application::batch::PaymentOutcome;
use crate::domain::payment::Currency;
use crate::error::AppError;
use chrono::SecondsFormat;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const ERROR_STATUS: &str = "ERROR";

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    user_id: &'a str,
    amount: Decimal,
    currency: Currency,
    status: &'a str,
    transaction_id: Option<&'a str>,
    processed_at: Option<String>,
    error: Option<&'a str>,
}

impl<'a> From<&'a PaymentOutcome> for OutcomeRecord<'a> {
    fn from(outcome: &'a PaymentOutcome) -> Self {
        let request = &outcome.request;
        match &outcome.result {
            Ok(result) => Self {
                user_id: &request.user_id,
                amount: request.amount,
                currency: request.currency,
                status: "SUCCESS",
                transaction_id: Some(&result.transaction_id),
                processed_at: Some(
                    result
                        .processed_at
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                ),
                error: None,
            },
            Err(e) => Self {
                user_id: &request.user_id,
                amount: request.amount,
                currency: request.currency,
                status: ERROR_STATUS,
                transaction_id: None,
                processed_at: None,
                error: Some(e.message()),
            },
        }
    }
}

/// Writes one CSV row per processed payment.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header followed by every outcome, then flushes.
    ///
    /// The header is written even when there are no outcomes.
    pub fn write_outcomes<'a, I>(&mut self, outcomes: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = &'a PaymentOutcome>,
    {
        let mut wrote_any = false;
        for outcome in outcomes {
            self.writer.serialize(OutcomeRecord::from(outcome))?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record([
                "user_id",
                "amount",
                "currency",
                "status",
                "transaction_id",
                "processed_at",
                "error",
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

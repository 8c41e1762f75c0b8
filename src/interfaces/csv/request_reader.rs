use crate::domain::payment::PaymentRequest;
use crate::error::AppError;
use std::io::Read;

/// Streams payment requests out of a CSV file.
///
/// The first row must be the header `user_id, amount, currency`, in any
/// column order. Amounts keep their exact text form (`50.00` stays at scale 2).
/// A row whose amount is not a decimal or whose currency is not USD, EUR or INR
/// comes out as an `Err`; the rows after it are still read. An empty `user_id`
/// is not a read error, the processor rejects it later.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Whitespace around fields is stripped and short rows are tolerated.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// One item per data row, parsed on demand.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest, AppError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AppError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Currency;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "user_id, amount, currency\nu1, 50.00, USD\nu2, 0.5, INR";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest, AppError>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.user_id, "u1");
        assert_eq!(first.amount, dec!(50.00));
        assert_eq!(first.amount.to_string(), "50.00");
        assert_eq!(first.currency, Currency::Usd);
        assert_eq!(results[1].as_ref().unwrap().currency, Currency::Inr);
    }

    #[test]
    fn test_reader_keeps_amount_precision() {
        let data = "user_id, amount, currency\n\
                    u1, 12345678901234567890.12, USD\n\
                    u2, 0.0000000000000000000000000001, EUR";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest, AppError>> = reader.requests().collect();

        let large = results[0].as_ref().unwrap();
        assert_eq!(large.amount.to_string(), "12345678901234567890.12");
        assert_eq!(large.amount.scale(), 2);

        let tiny = results[1].as_ref().unwrap();
        assert_eq!(tiny.amount.to_string(), "0.0000000000000000000000000001");
        assert!(tiny.amount > Decimal::ZERO);
    }

    #[test]
    fn test_reader_keeps_empty_user_id() {
        let data = "user_id, amount, currency\n, 10, EUR";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest, AppError>> = reader.requests().collect();

        assert_eq!(results[0].as_ref().unwrap().user_id, "");
    }

    #[test]
    fn test_reader_rejects_unsupported_currency() {
        let data = "user_id, amount, currency\nu1, 10, GBP\nu2, 10, EUR";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest, AppError>> = reader.requests().collect();

        let err = results[0].as_ref().unwrap_err();
        assert!(err.to_string().contains("Unsupported currency: GBP"));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_malformed_amount() {
        let data = "user_id, amount, currency\nu1, lots, USD";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest, AppError>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}

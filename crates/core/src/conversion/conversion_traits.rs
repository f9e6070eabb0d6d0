use super::conversion_model::{ConversionBatch, ConversionResult};
use async_trait::async_trait;
use fxconvert_conversion::{Amount, Currency};

/// Trait defining the contract for conversion aggregation.
///
/// None of these operations fail as a whole: upstream failures are recorded in
/// the returned results.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    /// Converts `amount` from `source` to a single `target`.
    async fn convert_one(&self, source: Currency, target: Currency, amount: Amount)
        -> ConversionResult;

    /// Converts `amount` from `source` to every main currency, in registry order.
    async fn convert_all(&self, source: Currency, amount: Amount) -> ConversionBatch;

    /// Converts `amount` from `source` to each of `targets`, preserving their order.
    async fn convert_to(
        &self,
        source: Currency,
        targets: Vec<Currency>,
        amount: Amount,
    ) -> ConversionBatch;
}

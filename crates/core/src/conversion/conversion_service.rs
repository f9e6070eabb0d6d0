use super::conversion_model::{ConversionBatch, ConversionResult};
use super::conversion_traits::ConversionServiceTrait;
use crate::currencies::main_currencies;
use async_trait::async_trait;
use futures::future::join_all;
use fxconvert_conversion::{Amount, ConversionProvider, ConversionRequest, Currency};
use std::sync::Arc;

/// Fans conversion requests out to a [`ConversionProvider`] and collects the
/// results.
///
/// Batch calls run concurrently. `join_all` yields outputs in input order, so
/// each result lands in the slot of its target no matter which call finishes
/// first. A failed call becomes a failure entry; it never aborts the batch.
#[derive(Clone)]
pub struct ConversionService {
    provider: Arc<dyn ConversionProvider>,
}

impl ConversionService {
    pub fn new(provider: Arc<dyn ConversionProvider>) -> Self {
        Self { provider }
    }

    async fn attempt(&self, request: ConversionRequest) -> ConversionResult {
        match self.provider.convert(&request).await {
            Ok(payload) => ConversionResult::success(request, payload),
            Err(e) => {
                log::warn!(
                    "Conversion {} -> {} via {} failed: {}",
                    request.source,
                    request.target,
                    self.provider.id(),
                    e
                );
                ConversionResult::failure(request, e.to_string())
            }
        }
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert_one(
        &self,
        source: Currency,
        target: Currency,
        amount: Amount,
    ) -> ConversionResult {
        self.attempt(ConversionRequest::new(source, target, amount))
            .await
    }

    async fn convert_all(&self, source: Currency, amount: Amount) -> ConversionBatch {
        self.convert_to(source, main_currencies(), amount).await
    }

    async fn convert_to(
        &self,
        source: Currency,
        targets: Vec<Currency>,
        amount: Amount,
    ) -> ConversionBatch {
        let started = std::time::Instant::now();
        let attempts = targets.into_iter().map(|target| {
            self.attempt(ConversionRequest::new(source.clone(), target, amount))
        });
        let results = join_all(attempts).await;

        let batch = ConversionBatch {
            source,
            amount,
            results,
        };
        log::info!(
            "Converted {} {} into {} currencies ({} failed) in {:?}",
            batch.amount,
            batch.source,
            batch.len(),
            batch.failed(),
            started.elapsed()
        );
        batch
    }
}

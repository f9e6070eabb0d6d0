//! Conversion module - result models, aggregation service, and traits.

mod conversion_model;
mod conversion_service;
mod conversion_traits;

pub use conversion_model::{ConversionBatch, ConversionOutcome, ConversionResult};
pub use conversion_service::ConversionService;
pub use conversion_traits::ConversionServiceTrait;

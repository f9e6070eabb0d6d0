use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ConversionRequestBody, ConversionResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use fxconvert_core::currencies::new_currency;

/// Single conversion, or a batch over the main currencies when
/// `allCurrencies` is set. A failed single conversion is returned as 502;
/// failures inside a batch are reported per entry.
async fn create_conversion(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversionRequestBody>, JsonRejection>,
) -> ApiResult<Json<ConversionResponse>> {
    let Json(body) = payload?;
    let source = body.from.trim();
    if source.is_empty() {
        return Err(ApiError::BadRequest("'from' currency is required".to_string()));
    }
    let amount = state
        .amount_parser
        .parse(body.amount.as_deref().unwrap_or_default())?;

    if body.all_currencies {
        let batch = state
            .conversion_service
            .convert_all(new_currency(source), amount)
            .await;
        return Ok(Json(ConversionResponse::Batch(batch)));
    }

    let target = body
        .to
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("'to' currency is required unless allCurrencies is set".into())
        })?;

    let result = state
        .conversion_service
        .convert_one(new_currency(source), new_currency(target), amount)
        .await;
    if let Some(err) = result.error() {
        return Err(err.into());
    }
    Ok(Json(ConversionResponse::Single(result)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/conversions", post(create_conversion))
}

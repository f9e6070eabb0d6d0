use std::sync::Arc;

use crate::{main_lib::AppState, models::MainCurrenciesResponse};
use axum::{routing::get, Json, Router};
use fxconvert_core::currencies::main_currencies;

async fn get_main_currencies() -> Json<MainCurrenciesResponse> {
    Json(MainCurrenciesResponse {
        currencies: main_currencies(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currencies/main", get(get_main_currencies))
}

use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::ConvertForm,
    render::FormValues,
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use fxconvert_core::currencies::new_currency;

async fn index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/view/")]).into_response()
}

async fn view_page(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let html = state.renderer.render_view(&FormValues::default(), None)?;
    Ok(Html(html))
}

/// Handles the converter form. `allCurrencies=all` selects batch mode, in
/// which `currency2` is ignored.
async fn convert_page(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<ConvertForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(form) = payload?;
    let batch_mode = form.wants_all();
    let values = FormValues {
        amount: &form.amount,
        currency1: &form.currency1,
        currency2: &form.currency2,
        all_currencies: batch_mode,
    };

    let source = form.currency1.trim();
    let target = form.currency2.trim();
    if source.is_empty() {
        return form_error(&state, &values, "Enter the currency to convert from.");
    }
    if !batch_mode && target.is_empty() {
        return form_error(&state, &values, "Enter the currency to convert to.");
    }

    let amount = match state.amount_parser.parse(&form.amount) {
        Ok(amount) => amount,
        Err(e) => return form_error(&state, &values, &e.to_string()),
    };

    if batch_mode {
        let batch = state
            .conversion_service
            .convert_all(new_currency(source), amount)
            .await;
        let html = state.renderer.render_batch(&batch)?;
        return Ok(Html(html).into_response());
    }

    let result = state
        .conversion_service
        .convert_one(new_currency(source), new_currency(target), amount)
        .await;
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    let html = state.renderer.render_single(&result)?;
    Ok((status, Html(html)).into_response())
}

/// Re-renders the form with the user's input and an error message.
fn form_error(state: &AppState, values: &FormValues<'_>, message: &str) -> ApiResult<Response> {
    let html = state.renderer.render_view(values, Some(message))?;
    Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/view/", get(view_page))
        .route("/convert/", post(convert_page))
}

use serde_json::json;

use crate::context::RequestContext;
use crate::error::PredictError;
use crate::http::StatusCode;
use crate::page::Page;
use crate::prediction::Prediction;
use crate::templates;

pub const APP_TITLE: &str = "SnoyPredict!";
pub const DEFAULT_PREDICTION: &str = "The sky will still be blue";

pub async fn homepage(_ctx: RequestContext) -> Result<Page, PredictError> {
    let html = templates::render(
        templates::HOME,
        &json!({
            "title": APP_TITLE,
            "placeholder": DEFAULT_PREDICTION,
        }),
    )?;
    Ok(Page::html(html))
}

pub async fn style_css(_ctx: RequestContext) -> Result<Page, PredictError> {
    Ok(Page::css(templates::STYLE_CSS))
}

pub async fn predict(ctx: RequestContext) -> Result<Page, PredictError> {
    let prediction = Prediction::from_context(&ctx)?;
    tracing::debug!("prediction received for {}", prediction.date);

    let html = templates::render(
        templates::PREDICT,
        &json!({
            "title": "Prediction made (I'm lying)",
            "prediction": prediction.text,
            "date": prediction.date,
        }),
    )?;
    Ok(Page::html(html))
}

pub async fn not_found(ctx: RequestContext) -> Result<Page, PredictError> {
    let html = templates::render(
        templates::NOT_FOUND,
        &json!({
            "title": "Not found",
            "path": ctx.path(),
        }),
    )?;
    Ok(Page::html(html).with_status(StatusCode::NOT_FOUND))
}

//! Compiled HTML templates and static assets.
//!
//! Every page shares the `head` partial, so the title and stylesheet link stay consistent.
//! Templates are compiled once per process (or Worker isolate) on first use.

use handlebars::{Handlebars, TemplateError};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::PredictError;

pub const HOME: &str = "home";
pub const PREDICT: &str = "predict";
pub const NOT_FOUND: &str = "not_found";
pub const ERROR: &str = "error";

pub const STYLE_CSS: &str = include_str!("../static/style.css");

const HEAD_PARTIAL: &str = "head";

const TEMPLATES: &[(&str, &str)] = &[
    (HOME, include_str!("../templates/home.hbs")),
    (PREDICT, include_str!("../templates/predict.hbs")),
    (NOT_FOUND, include_str!("../templates/not_found.hbs")),
    (ERROR, include_str!("../templates/error.hbs")),
];

static REGISTRY: Lazy<Result<Handlebars<'static>, TemplateError>> = Lazy::new(build_registry);

fn build_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_partial(HEAD_PARTIAL, include_str!("../templates/head.hbs"))?;
    for (name, source) in TEMPLATES {
        hbs.register_template_string(name, source)?;
    }
    Ok(hbs)
}

/// Render a registered template with HTML escaping of interpolated values.
pub fn render<T>(name: &str, data: &T) -> Result<String, PredictError>
where
    T: Serialize,
{
    let registry = REGISTRY.as_ref().map_err(|err| {
        PredictError::internal(anyhow::anyhow!("template registry unavailable: {err}"))
    })?;
    registry
        .render(name, data)
        .map_err(|source| PredictError::Render { source })
}

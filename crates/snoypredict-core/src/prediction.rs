use chrono::NaiveDate;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::PredictError;

pub const PREDICTION_FIELD: &str = "prediction";
pub const DATE_FIELD: &str = "date";

/// A prediction submitted through the homepage form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prediction {
    #[serde(rename = "prediction")]
    pub text: String,
    pub date: NaiveDate,
}

impl Prediction {
    /// Read `prediction` and `date` from the query string, in that order.
    pub fn from_context(ctx: &RequestContext) -> Result<Self, PredictError> {
        let mut params = ctx.query_map()?;
        let mut field = |name: &'static str| {
            params
                .remove(name)
                .ok_or_else(|| PredictError::field_not_provided(name))
        };

        let text = field(PREDICTION_FIELD)?;
        let raw_date = field(DATE_FIELD)?;
        let date = raw_date
            .parse::<NaiveDate>()
            .map_err(|source| PredictError::InvalidDate {
                date: raw_date.clone(),
                source,
            })?;

        Ok(Self { text, date })
    }
}

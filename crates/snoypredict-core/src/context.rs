use std::collections::HashMap;

use url::Url;

use crate::error::PredictError;

/// Request context exposed to handlers and middleware.
///
/// Adapters forward nothing but the request URL. It must be absolute; dot-segments in the path
/// are resolved before routing.
#[derive(Clone, Debug)]
pub struct RequestContext {
    url: Url,
}

impl RequestContext {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse `url` into a context.
    pub fn parse(url: &str) -> Result<Self, PredictError> {
        let parsed = Url::parse(url).map_err(|source| PredictError::invalid_url(url, source))?;
        Ok(Self::new(parsed))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Decoded query pairs. When a key repeats the last value wins.
    pub fn query_map(&self) -> Result<HashMap<String, String>, PredictError> {
        let query = self.url.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|source| PredictError::InvalidQuery { source })?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    #[test]
    fn parse_keeps_host_and_path() {
        let ctx = RequestContext::parse("https://example.com/predict?x=1").expect("ctx");
        assert_eq!(ctx.url().as_str(), "https://example.com/predict?x=1");
        assert_eq!(ctx.url().host_str(), Some("example.com"));
        assert_eq!(ctx.path(), "/predict");
    }

    #[test]
    fn parse_without_path_defaults_to_root() {
        let ctx = RequestContext::parse("https://example.com").expect("ctx");
        assert_eq!(ctx.path(), "/");
    }

    #[test]
    fn parse_resolves_dot_segments() {
        let ctx = RequestContext::parse("https://example.com/a/../style.css").expect("ctx");
        assert_eq!(ctx.path(), "/style.css");
        let ctx = RequestContext::parse("https://example.com/./predict").expect("ctx");
        assert_eq!(ctx.path(), "/predict");
    }

    #[test]
    fn parse_rejects_invalid_url() {
        let err = RequestContext::parse("https://exa mple.com/").expect_err("invalid");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("https://exa mple.com/"));
    }

    #[test]
    fn parse_rejects_relative_and_bare_inputs() {
        for input in ["foo", "/predict?prediction=a&date=2021-02-05", ""] {
            let err = RequestContext::parse(input).expect_err("relative url");
            assert!(matches!(err, PredictError::InvalidUrl { .. }), "{input}");
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn query_map_decodes_and_last_value_wins() {
        let ctx = RequestContext::parse(
            "http://localhost/predict?prediction=first&prediction=It+will+rain%21&date=2021-02-05",
        )
        .expect("ctx");
        let map = ctx.query_map().expect("map");
        assert_eq!(map.get("prediction").map(String::as_str), Some("It will rain!"));
        assert_eq!(map.get("date").map(String::as_str), Some("2021-02-05"));
    }

    #[test]
    fn query_map_is_empty_without_query() {
        let ctx = RequestContext::parse("http://localhost/predict").expect("ctx");
        assert!(ctx.query_map().expect("map").is_empty());
    }
}

use axum::http::Request;
use http::header::HOST;

/// Rebuild the absolute URL the app expects from an origin-form request.
///
/// Prefers an absolute request target, then the `Host` header, then `fallback_authority`
/// (the listen address).
pub fn request_url<B>(request: &Request<B>, fallback_authority: &str) -> String {
    let uri = request.uri();
    if uri.scheme().is_some() && uri.authority().is_some() {
        return uri.to_string();
    }

    let authority = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(fallback_authority);
    let path_and_query = uri
        .path_and_query()
        .map(|value| value.as_str())
        .unwrap_or("/");

    format!("http://{authority}{path_and_query}")
}

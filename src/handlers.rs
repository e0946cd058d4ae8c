use crate::error::{AppError, AppResult};
use crate::models::{HealthResponse, QueryRequest, QueryResponse};
use crate::translator;
use axum::{
    body::Bytes,
    http::{header, HeaderMap},
    response::Json as ResponseJson,
};
use tracing::debug;

/// Health check handler
/// Returns the service status and name
pub async fn health_check() -> ResponseJson<HealthResponse> {
    debug!("Health check endpoint called");
    ResponseJson(HealthResponse::ok())
}

/// Query handler
/// Accepts a JSON payload with a free-text query and returns the placeholder SQL
pub async fn query_handler(
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<ResponseJson<QueryResponse>> {
    let request = decode_query_request(&headers, &body)?;
    debug!("Query endpoint called with query: {}", request.query);

    Ok(ResponseJson(translator::convert(&request.query)))
}

/// Decodes the request body as JSON when the content type is absent or a JSON type.
fn decode_query_request(headers: &HeaderMap, body: &[u8]) -> AppResult<QueryRequest> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .map(is_json_content_type)
            .unwrap_or(false);
        if !is_json {
            return Err(AppError::ValidationError(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[tokio::test]
    async fn test_health_check() {
        let ResponseJson(response) = health_check().await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.service, "nl2sql-service");
    }

    #[tokio::test]
    async fn test_health_check_is_stable() {
        let _ = query_handler(json_headers(), Bytes::from_static(br#"{"query": "anything"}"#)).await;

        let ResponseJson(first) = health_check().await;
        let ResponseJson(second) = health_check().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_query_handler_valid_query() {
        let body = Bytes::from_static(br#"{"query": "red shoes"}"#);

        let result = query_handler(json_headers(), body).await;
        let ResponseJson(response) = result.unwrap();
        assert_eq!(
            response.sql,
            "SELECT * FROM table WHERE description LIKE '%red shoes%'"
        );
        assert_eq!(response.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_query_handler_empty_query() {
        let body = Bytes::from_static(br#"{"query": ""}"#);

        let result = query_handler(json_headers(), body).await;
        let ResponseJson(response) = result.unwrap();
        assert_eq!(response.sql, "SELECT * FROM table WHERE description LIKE '%%'");
    }

    #[tokio::test]
    async fn test_query_handler_without_content_type() {
        let body = Bytes::from_static(br#"{"query": "red shoes"}"#);

        let result = query_handler(HeaderMap::new(), body).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_query_handler_rejects_text_plain() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let body = Bytes::from_static(br#"{"query": "red shoes"}"#);

        let result = query_handler(headers, body).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=utf-8"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/jsonp"));
        assert!(!is_json_content_type(""));
    }
}

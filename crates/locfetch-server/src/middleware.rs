use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for one proxy call, carried in request extensions so the
/// field-update handler can tag its Sitecore log lines with it.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Caller-supplied id, if it is printable and not blank.
fn caller_request_id(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

/// Tags every request with a [`RequestId`] and returns it in `x-request-id`.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = RequestId(
        caller_request_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string()),
    );
    let header = HeaderValue::from_str(&id.0).ok();
    req.extensions_mut().insert(id);

    let mut response = next.run(req).await;
    if let Some(header) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, header);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_id_is_trimmed_and_blank_is_ignored() {
        let mut headers = HeaderMap::new();
        assert_eq!(caller_request_id(&headers), None);

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert_eq!(caller_request_id(&headers), None);

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" req-7 "));
        assert_eq!(caller_request_id(&headers).as_deref(), Some("req-7"));
    }
}

//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Keep a client-supplied `x-request-id` instead of replacing it
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The same ID is echoed on the response

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The request ID header value, or "unknown" if none was assigned.
pub fn request_id_of<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_uuids() {
        let request = Request::new(());
        let mut maker = MakeRequestUuid;

        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();

        let a = a.header_value().to_str().unwrap().to_string();
        let b = b.header_value().to_str().unwrap().to_string();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_request_id_of() {
        let mut request = Request::new(());
        assert_eq!(request_id_of(&request), "unknown");

        request.headers_mut().insert(X_REQUEST_ID, HeaderValue::from_static("abc"));
        assert_eq!(request_id_of(&request), "abc");
    }
}

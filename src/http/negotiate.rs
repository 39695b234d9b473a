//! The locale negotiation boundary.
//!
//! Full locale negotiation (Accept-Language parsing, cookie handling,
//! redirects between locale trees) is the embedding application's business.
//! This crate only defines the seam: a handler that takes the request and
//! produces the response, invoked once per request in production mode and
//! returned verbatim.

use std::future::Future;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;

/// An externally supplied, fully featured locale negotiation handler.
///
/// Treated as opaque: the gateway never inspects or modifies its response,
/// and performs no retry or recovery around it. Failures propagate to the
/// serving stack's own handling.
pub trait LocaleNegotiator: Send + Sync + 'static {
    fn handle(&self, req: Request<Body>) -> BoxFuture<'static, Response>;
}

/// Async closures are negotiators, so embedders (and tests) can write
/// `Arc::new(|req| async move { ... })`.
impl<F, Fut> LocaleNegotiator for F
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn handle(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        Box::pin(self(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_closure_is_a_negotiator() {
        let negotiator =
            |_req: Request<Body>| async { (StatusCode::OK, "negotiated").into_response() };

        let req = Request::builder().uri("/about").body(Body::default()).unwrap();
        let res = negotiator.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

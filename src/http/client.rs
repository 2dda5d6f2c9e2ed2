//! Shared HTTP call path.
//!
//! Every accessor operation funnels through [`api_call`]: issue the
//! request on the authenticated client, read the full body, and emit one
//! debug event with the status and raw body. Status interpretation and
//! JSON decoding stay with the entity operations, which know what
//! "Application: Status code error" versus "Post: Status code error"
//! means.

use http::Extensions;
use reqwest::{Method, Request, Response, header::CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use std::time::Duration;
use tracing::{Span, debug};

use crate::error::Error;

/// Bound on every network call; there are no retries past it.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// Used via TracingMiddleware<RequestSpan>; the compiler can't see that
// statically, hence the dead_code attribute.
#[allow(dead_code)]
struct RequestSpan;

impl ReqwestOtelSpanBackend for RequestSpan {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "danmaku-api-request",
            req,
            request_body = req
                .body()
                .and_then(|b| b.as_bytes())
                .map(String::from_utf8_lossy)
                .as_deref(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Wraps an authenticated reqwest client with the request-span middleware.
pub fn wrap(client: reqwest::Client) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::<RequestSpan>::new())
        .build()
}

/// Issues a single bounded request and returns the status with the full
/// body text. Transport and timeout failures propagate; nothing here
/// inspects the payload.
///
/// # Errors
/// [`Error::InvalidParams`] for methods other than GET/POST; transport
/// and timeout failures as [`Error::HttpMiddleware`] / [`Error::Http`].
pub async fn api_call(
    client: &ClientWithMiddleware,
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<(u16, String), Error> {
    let request = match method {
        Method::GET => client.get(url),
        Method::POST => client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.unwrap_or_default()),
        _ => {
            return Err(Error::InvalidParams(
                "Unsupported HTTP method".to_string(),
            ));
        }
    };

    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    debug!(%url, status, body = %body, "api response");

    Ok((status, body))
}

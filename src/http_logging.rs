use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

use crate::metrics::generate_request_id;

/// Header carrying the request id back to the client.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A Tower layer that logs each HTTP request with its outcome and duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let request_id = generate_request_id();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        // Take the ready service and leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match result {
                Ok(mut response) => {
                    let status = response.status().as_u16();
                    if let Ok(value) = http::HeaderValue::from_str(&request_id) {
                        response.headers_mut().insert(REQUEST_ID_HEADER, value);
                    }
                    if response.status().is_server_error() {
                        warn!(
                            %method, %path, %request_id, status, duration_ms,
                            "HTTP request failed"
                        );
                    } else {
                        info!(
                            %method, %path, %request_id, status, duration_ms,
                            "HTTP request completed"
                        );
                    }
                    Ok(response)
                }
                Err(e) => {
                    warn!(%method, %path, %request_id, duration_ms, "HTTP request errored");
                    Err(e)
                }
            }
        })
    }
}

//! One structured log line per completed request, tagged with the deck it
//! touched when the route names one.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, deck_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_info().get("deck_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            let line = CompletedRequest {
                method,
                path,
                status: status.as_u16(),
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
                trace_id,
                deck_id,
            };
            line.emit(status);

            result
        })
    }
}

struct CompletedRequest {
    method: String,
    path: String,
    status: u16,
    duration_us: u64,
    trace_id: String,
    deck_id: Option<String>,
}

impl CompletedRequest {
    fn emit(&self, status: StatusCode) {
        let Self {
            method,
            path,
            status: status_code,
            duration_us,
            trace_id,
            deck_id,
        } = self;
        let deck_id = deck_id.as_deref().unwrap_or("-");
        macro_rules! completed {
            ($level:ident) => {
                $level!(
                    http.method = %method,
                    url.path = %path,
                    http.status_code = *status_code,
                    duration_us = *duration_us,
                    trace_id = %trace_id,
                    deck_id,
                    "request_completed"
                )
            };
        }

        if status.is_server_error() {
            completed!(error);
        } else if status.is_client_error() {
            completed!(warn);
        } else {
            completed!(info);
        }
    }
}

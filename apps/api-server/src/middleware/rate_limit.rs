//! Rate limiting middleware.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use socialplan_shared::ErrorResponse;
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use socialplan_core::ports::RateLimiter;

/// Rate limiting middleware factory.
pub struct RateLimitMiddleware {
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Arc<dyn RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
    limiter: Arc<dyn RateLimiter>,
}

/// Caller identity: the Authorization header when one is sent, otherwise
/// the peer IP address.
fn client_key(req: &ServiceRequest) -> String {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match token {
        Some(token) => format!("token:{token}"),
        None => match req.peer_addr() {
            Some(addr) => format!("ip:{}", addr.ip()),
            None => "ip:unknown".to_string(),
        },
    }
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = Arc::clone(&self.limiter);

        Box::pin(async move {
            let key = client_key(&req);

            let remaining = match limiter.check(&key).await {
                Ok(result) if !result.allowed => {
                    // Round up so clients never retry too early.
                    let retry_after = result.reset_after.as_secs()
                        + u64::from(result.reset_after.subsec_nanos() > 0);
                    tracing::warn!(%key, retry_after, "Rate limit exceeded");

                    let error = ErrorResponse::new("Too many requests").with_details(format!(
                        "Rate limit exceeded. Try again in {retry_after} seconds."
                    ));
                    let response = HttpResponse::TooManyRequests()
                        .insert_header(("X-RateLimit-Remaining", "0"))
                        .insert_header((header::RETRY_AFTER, retry_after.to_string()))
                        .json(error);

                    return Ok(req.into_response(response).map_into_right_body());
                }
                Ok(result) => Some(result.remaining),
                Err(e) => {
                    // Fail open: a broken limiter must not take the API down.
                    tracing::error!(error = %e, "Rate limiter error, failing open");
                    None
                }
            };

            let mut res = service.call(req).await?;
            if let Some(remaining) = remaining {
                if let Ok(value) = header::HeaderValue::from_str(&remaining.to_string()) {
                    res.headers_mut().insert(
                        header::HeaderName::from_static("x-ratelimit-remaining"),
                        value,
                    );
                }
            }
            Ok(res.map_into_left_body())
        })
    }
}

use crate::{handle::Shared, session::SessionHandle, CsrfHandle, CSRF_HEADER_NAME};
use http::Request;
use relief_crypto::MaskedSecret;
use std::task::{self, Poll};
use tower::Service;
use tracing::debug;
use triomphe::Arc;

/// Attaches a [`CsrfHandle`] to every incoming request.
///
/// The handle captures the request method and the value of the fallback
/// header, and borrows the [`SessionHandle`] the host's session middleware
/// put into the request extensions. The request and response pass through
/// otherwise untouched; rendering the masked token and rejecting failed
/// verifications stay with the host.
#[derive(Clone)]
pub struct CsrfService<S> {
    inner: S,
}

impl<S> CsrfService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S, ReqBody> Service<Request<ReqBody>> for CsrfService<S>
where
    S: Service<Request<ReqBody>>,
{
    type Error = S::Error;
    type Future = S::Future;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let header_token = req
            .headers()
            .get(&CSRF_HEADER_NAME)
            .and_then(|value| match value.to_str() {
                Ok(value) => Some(MaskedSecret::from(value)),
                Err(error) => {
                    debug!(?error, "failed to decode the csrf header");
                    None
                }
            });

        let handle = CsrfHandle {
            inner: Arc::new(Shared {
                session: req.extensions().get::<SessionHandle>().cloned(),
                method: req.method().clone(),
                header_token,
            }),
        };

        req.extensions_mut().insert(handle);

        self.inner.call(req)
    }
}

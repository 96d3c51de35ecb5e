use crate::CsrfService;
use tower::Layer;

/// Wraps services with [`CsrfService`].
#[derive(Clone, Copy, Default)]
pub struct CsrfLayer {
    _priv: (),
}

impl CsrfLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Layer<S> for CsrfLayer {
    type Service = CsrfService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CsrfService::new(inner)
    }
}

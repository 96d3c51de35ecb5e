use crate::{lifecycle, session::SessionHandle, Token};
use http::Method;
use relief_crypto::{MaskedSecret, MaskedSecretRef};
use triomphe::Arc;

pub(crate) struct Shared {
    pub(crate) session: Option<SessionHandle>,
    pub(crate) method: Method,
    pub(crate) header_token: Option<MaskedSecret>,
}

/// Request-scoped view of the CSRF state, inserted into the request
/// extensions by [`CsrfService`](crate::CsrfService).
#[derive(Clone)]
pub struct CsrfHandle {
    pub(crate) inner: Arc<Shared>,
}

impl CsrfHandle {
    fn session(&self) -> &SessionHandle {
        self.inner
            .session
            .as_ref()
            .expect("no session attached to the request")
    }

    /// The session's plaintext token, generated on first use.
    ///
    /// Only hand this to trusted sinks. Responses embed
    /// [`masked_token`](Self::masked_token) instead.
    #[must_use]
    pub fn token(&self) -> Token {
        self.session().with(lifecycle::touch)
    }

    /// A freshly masked representation of the session's token; a different
    /// wire value on every call.
    #[must_use]
    pub fn masked_token(&self) -> MaskedSecret {
        self.session().with(lifecycle::masked_token)
    }

    /// Validate the request's submitted masked token.
    ///
    /// `form_value` is the [`FORM_FIELD`](crate::FORM_FIELD) form field as
    /// parsed by the host; when the form carries no value, the
    /// [`CSRF_HEADER_NAME`](crate::CSRF_HEADER_NAME) header captured from
    /// the request is consulted instead. Safe methods always verify to
    /// `false`.
    #[must_use]
    pub fn verify(&self, form_value: Option<&MaskedSecretRef>) -> bool {
        let submitted = form_value.or(self.inner.header_token.as_deref());

        self.session()
            .with(|session| lifecycle::validate(session, &self.inner.method, submitted))
    }

    /// Remove the session's token, forcing regeneration on the next read.
    pub fn reset(&self) {
        self.session().with(lifecycle::reset);
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::CsrfHandle;
    use axum_core::extract::FromRequestParts;
    use http::request::Parts;
    use std::convert::Infallible;

    impl<S> FromRequestParts<S> for CsrfHandle
    where
        S: Sync,
    {
        type Rejection = Infallible;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            let handle = parts
                .extensions
                .get::<Self>()
                .expect("Service not wrapped by CSRF middleware")
                .clone();

            Ok(handle)
        }
    }
}

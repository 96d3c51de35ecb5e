#![doc = include_str!("../README.md")]

pub use self::{
    handle::CsrfHandle,
    layer::CsrfLayer,
    service::CsrfService,
    session::{MemorySession, SessionHandle, SessionMap},
    token::{generate_token, generate_token_with},
};
pub use relief_crypto::{MaskedSecret, MaskedSecretRef};

pub mod lifecycle;

mod handle;
mod layer;
mod service;
mod session;
mod token;

/// Session key the plaintext token is stored under.
pub const SESSION_KEY: &str = "_csrf_token";

/// Form field checked first for the submitted masked token.
pub const FORM_FIELD: &str = "csrf_token";

/// Number of characters in a generated token.
pub const TOKEN_LENGTH: usize = 20;

/// Fallback request header for clients that submit the masked token
/// out-of-band, e.g. from an `XMLHttpRequest` setup hook.
pub static CSRF_HEADER_NAME: http::HeaderName =
    http::HeaderName::from_static("x-relief-csrf-token");

mod newtypes {
    /// A session-bound CSRF token in its plaintext form.
    ///
    /// Only ever leaves the session in masked form; see
    /// [`lifecycle::masked_token`](crate::lifecycle::masked_token).
    #[aliri_braid::braid]
    pub struct Token;
}

pub use self::newtypes::{Token, TokenRef};

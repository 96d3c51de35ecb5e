//! The per-session token lifecycle.
//!
//! A session holds either no token or exactly one, stored in plaintext
//! under [`SESSION_KEY`](crate::SESSION_KEY). The token itself never goes
//! over the wire: responses embed a masked form that changes on every read,
//! and submitted masked forms are checked against the stored plaintext.
//!
//! The session is threaded through every call explicitly; there is no
//! ambient request state.

use crate::{session::SessionMap, token::generate_token, Token, SESSION_KEY};
use http::Method;
use relief_crypto::{
    constant_time_equal_str, mask_secret, unmask_secret, MaskedSecret, MaskedSecretRef, Secret,
};
use tracing::debug;

/// Whether `method` belongs to the safe set that is never validated.
///
/// CSRF only concerns state-changing requests. Note the flip side: a
/// safe-method request can never be confirmed valid either, so callers must
/// not feed a [`validate`] result on GET/HEAD into an authorisation
/// decision.
#[must_use]
pub fn is_safe_method(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

/// Return the session's token, generating and storing one first if the
/// session holds none. Idempotent once a token exists.
pub fn touch(session: &mut dyn SessionMap) -> Token {
    if let Some(token) = session.get(SESSION_KEY) {
        return token.into();
    }

    let token = generate_token();
    session.insert(SESSION_KEY, token.as_str().to_owned());

    token
}

/// Mask the session's token for embedding into a response, generating the
/// token first if necessary.
///
/// Every call yields a different wire value over the same underlying token,
/// so response bodies never repeat the representation. This is the defence
/// against compression oracles such as BREACH.
pub fn masked_token(session: &mut dyn SessionMap) -> MaskedSecret {
    let token = touch(session);
    mask_secret(&Secret::from(token.as_str()))
}

/// Check a submitted masked token against the session.
///
/// Fails closed: anything short of a well-formed masked value on an unsafe
/// method that decrypts to the stored token yields `false`. Unmasking
/// failures degrade to `false` instead of propagating; they are logged at
/// debug level.
#[must_use]
pub fn validate(
    session: &dyn SessionMap,
    method: &Method,
    submitted: Option<&MaskedSecretRef>,
) -> bool {
    if is_safe_method(method) {
        debug!(%method, "safe methods are never validated");
        return false;
    }

    let Some(submitted) = submitted else {
        debug!("no masked token submitted");
        return false;
    };

    let Some(token) = session.get(SESSION_KEY) else {
        debug!("session holds no token");
        return false;
    };

    let unmasked = match unmask_secret(submitted) {
        Ok(Secret::Text(text)) => text,
        Ok(Secret::Bytes(..)) => {
            debug!("submitted value unmasked to raw bytes");
            return false;
        }
        Err(error) => {
            debug!(%error, "failed to unmask submitted value");
            return false;
        }
    };

    constant_time_equal_str(&unmasked, &token).unwrap_or_else(|error| {
        debug!(%error, "submitted value is not single-byte encoded");
        false
    })
}

/// Drop the session's token so the next [`touch`] generates a fresh one.
///
/// Meant for privilege transitions, e.g. right after a login.
pub fn reset(session: &mut dyn SessionMap) {
    session.remove(SESSION_KEY);
}

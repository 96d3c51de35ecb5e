use crate::error::InvalidEncoding;
use subtle::ConstantTimeEq;

/// Compare two byte strings without leaking where they first differ.
///
/// Inputs of unequal length compare unequal immediately; the length itself
/// is not treated as a secret. Equal-length inputs are compared over their
/// full length, accumulating the differences instead of short-circuiting on
/// the first mismatch.
#[must_use]
pub fn constant_time_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// [`constant_time_equal`] over text values.
///
/// # Errors
///
/// Returns [`InvalidEncoding`] if either value contains characters outside
/// the single-byte range; the timing guarantees only cover single-byte
/// encodings.
pub fn constant_time_equal_str(a: &str, b: &str) -> Result<bool, InvalidEncoding> {
    if !a.is_ascii() || !b.is_ascii() {
        return Err(InvalidEncoding);
    }

    Ok(constant_time_equal(a.as_bytes(), b.as_bytes()))
}

#[cfg(test)]
mod test {
    use super::{constant_time_equal, constant_time_equal_str};
    use crate::error::InvalidEncoding;

    #[test]
    fn equal_bytes() {
        assert!(constant_time_equal(b"foo", b"foo"));
        assert!(!constant_time_equal(b"foo", b"bar"));
    }

    #[test]
    fn unequal_lengths_are_never_equal() {
        assert!(!constant_time_equal(b"foo", b"foobar"));
        assert!(!constant_time_equal(b"", b"x"));
    }

    #[test]
    fn empty_inputs_are_equal() {
        assert!(constant_time_equal(b"", b""));
    }

    #[test]
    fn text_values() {
        assert!(constant_time_equal_str("foo", "foo").unwrap());
        assert!(!constant_time_equal_str("foo", "bar").unwrap());
    }

    #[test]
    fn non_ascii_text_is_rejected() {
        assert_eq!(constant_time_equal_str("ä", "ä"), Err(InvalidEncoding));
        assert_eq!(constant_time_equal_str("a", "ä"), Err(InvalidEncoding));
    }
}

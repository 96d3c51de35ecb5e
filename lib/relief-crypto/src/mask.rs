use crate::{
    error::UnmaskError,
    otp::{decrypt_once, encrypt_once},
};
use hex_simd::AsciiCase;
use std::str;
use zeroize::Zeroizing;

const TAG_TEXT: u8 = b'u';
const TAG_BYTES: u8 = b'b';

mod newtypes {
    /// The masked wire form of a [`Secret`](super::Secret): lowercase hex of
    /// `key || ciphertext`.
    #[aliri_braid::braid]
    pub struct MaskedSecret;
}

pub use self::newtypes::{MaskedSecret, MaskedSecretRef};

/// A secret value whose type survives a masking round-trip.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Secret {
    Text(String),
    Bytes(Vec<u8>),
}

impl Secret {
    fn tagged(&self) -> Zeroizing<Vec<u8>> {
        let (tag, bytes) = match self {
            Self::Text(text) => (TAG_TEXT, text.as_bytes()),
            Self::Bytes(bytes) => (TAG_BYTES, bytes.as_slice()),
        };

        let mut tagged = Zeroizing::new(Vec::with_capacity(bytes.len() + 1));
        tagged.push(tag);
        tagged.extend_from_slice(bytes);

        tagged
    }
}

impl From<&str> for Secret {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Secret {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&[u8]> for Secret {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Hide `secret` behind a fresh one-time pad.
///
/// The plaintext is the secret's bytes behind a one-byte type tag; the wire
/// form is the lowercase hex encoding of `key || ciphertext`, always of even
/// length. Every call draws a new pad, so masking the same secret twice
/// yields two unrelated wire values. That re-randomisation keeps the secret
/// out of reach of compression oracles once it is embedded into a response.
#[must_use]
pub fn mask_secret(secret: &Secret) -> MaskedSecret {
    let tagged = secret.tagged();
    let (key, ciphertext) = encrypt_once(&tagged);

    let mut buf = Zeroizing::new(Vec::with_capacity(key.len() + ciphertext.len()));
    buf.extend_from_slice(&key);
    buf.extend_from_slice(&ciphertext);

    hex_simd::encode_to_string(buf.as_slice(), AsciiCase::Lower).into()
}

/// Recover the secret behind a masked value.
///
/// The decoded buffer is split into `key` and `ciphertext` halves of
/// `floor(n / 2)` bytes each; a trailing odd byte is dropped by the halving.
///
/// # Errors
///
/// Returns [`UnmaskError::MalformedEncoding`] if the value is not valid hex
/// of even length, is too short to carry a type tag, or tags a text secret
/// that does not decode as UTF-8. Returns [`UnmaskError::UnknownTagVersion`]
/// for an unrecognised type tag; such a payload is corrupted or forged and
/// is never accepted.
pub fn unmask_secret(masked: &MaskedSecretRef) -> Result<Secret, UnmaskError> {
    let decoded = Zeroizing::new(
        hex_simd::decode_to_vec(masked.as_str()).map_err(|_| UnmaskError::MalformedEncoding)?,
    );

    let half = decoded.len() / 2;
    let plaintext = Zeroizing::new(decrypt_once(&decoded[..half], &decoded[half..half * 2]));

    let Some((&tag, secret)) = plaintext.split_first() else {
        return Err(UnmaskError::MalformedEncoding);
    };

    match tag {
        TAG_TEXT => str::from_utf8(secret)
            .map(|text| Secret::Text(text.to_owned()))
            .map_err(|_| UnmaskError::MalformedEncoding),
        TAG_BYTES => Ok(Secret::Bytes(secret.to_vec())),
        tag => Err(UnmaskError::UnknownTagVersion(tag)),
    }
}

#[cfg(test)]
mod test {
    use super::{mask_secret, unmask_secret, MaskedSecret, MaskedSecretRef, Secret};
    use crate::{error::UnmaskError, otp::encrypt_once};
    use hex_simd::AsciiCase;
    use std::collections::HashSet;

    fn encode_masked(plaintext: &[u8], trailing: &[u8]) -> MaskedSecret {
        let (key, ciphertext) = encrypt_once(plaintext);

        let mut buf = key.to_vec();
        buf.extend_from_slice(&ciphertext);
        buf.extend_from_slice(trailing);

        hex_simd::encode_to_string(&buf, AsciiCase::Lower).into()
    }

    #[test]
    fn round_trip_preserves_the_type() {
        for secret in [
            Secret::from("foo"),
            Secret::from(b"foo".as_slice()),
            Secret::Text(String::new()),
            Secret::Bytes(Vec::new()),
            Secret::from("even"),
            Secret::from(b"\x00\xFF\x00".as_slice()),
        ] {
            let masked = mask_secret(&secret);
            assert_eq!(unmask_secret(&masked).unwrap(), secret);
        }
    }

    #[test]
    fn masking_is_randomised() {
        let secret = Secret::from("foo");
        let masked = (0..10)
            .map(|_| mask_secret(&secret))
            .collect::<HashSet<_>>();

        assert_eq!(masked.len(), 10);
    }

    #[test]
    fn wire_form_is_even_length_lowercase_hex() {
        let masked = mask_secret(&Secret::from("foo"));
        let value = masked.as_str();

        // tag + 3 secret bytes, so a 4 byte key and ciphertext each
        assert_eq!(value.len(), 16);
        assert!(value
            .bytes()
            .all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let masked = encode_masked(b"zforged", &[]);

        assert_eq!(
            unmask_secret(&masked),
            Err(UnmaskError::UnknownTagVersion(b'z'))
        );
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for input in ["not hex!", "abc", "f", "\u{e4}"] {
            assert_eq!(
                unmask_secret(MaskedSecretRef::from_str(input)),
                Err(UnmaskError::MalformedEncoding)
            );
        }
    }

    #[test]
    fn empty_input_carries_no_tag() {
        assert_eq!(
            unmask_secret(MaskedSecretRef::from_str("")),
            Err(UnmaskError::MalformedEncoding)
        );
    }

    #[test]
    fn trailing_odd_byte_is_dropped() {
        // Three decoded bytes halve into a one byte key and ciphertext; the
        // trailing byte never takes part in the decryption.
        let masked = encode_masked(&[super::TAG_TEXT], &[0xFF]);

        assert_eq!(unmask_secret(&masked).unwrap(), Secret::Text(String::new()));
    }

    #[test]
    fn text_that_is_not_utf8_is_rejected() {
        let masked = encode_masked(&[super::TAG_TEXT, 0xFF, 0xFE], &[]);

        assert_eq!(
            unmask_secret(&masked),
            Err(UnmaskError::MalformedEncoding)
        );
    }
}

use crate::{Token, TOKEN_LENGTH};
use rand::{distributions::Alphanumeric, Rng};

/// Generate a fresh token: [`TOKEN_LENGTH`] characters of `[A-Za-z0-9]`,
/// drawn from a cryptographically secure generator.
#[must_use]
pub fn generate_token() -> Token {
    rand::thread_rng()
        .sample_iter(Alphanumeric)
        .map(char::from)
        .take(TOKEN_LENGTH)
        .collect::<String>()
        .into()
}

/// Generate a token of `length` characters drawn uniformly from `alphabet`.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
#[must_use]
pub fn generate_token_with(length: usize, alphabet: &str) -> Token {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect::<String>()
        .into()
}

#[cfg(test)]
mod test {
    use super::{generate_token, generate_token_with};
    use crate::TOKEN_LENGTH;

    #[test]
    fn default_shape() {
        let token = generate_token();

        assert_eq!(token.as_str().len(), TOKEN_LENGTH);
        assert!(token.as_str().bytes().all(|byte| byte.is_ascii_alphanumeric()));
    }

    #[test]
    fn custom_length_and_alphabet() {
        assert_eq!(generate_token_with(1, "ab").as_str().len(), 1);
        assert_eq!(generate_token_with(20, "1").as_str(), "1".repeat(20));
    }
}

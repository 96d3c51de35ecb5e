use rand::RngCore;
use zeroize::Zeroizing;

fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Encrypt `plaintext` under a freshly drawn one-time pad.
///
/// The key comes from a cryptographically secure generator and has the same
/// length as the plaintext, as does the ciphertext. A failing entropy source
/// aborts instead of degrading to a weaker generator.
#[must_use]
pub fn encrypt_once(plaintext: &[u8]) -> (Zeroizing<Vec<u8>>, Vec<u8>) {
    let mut key = Zeroizing::new(vec![0; plaintext.len()]);
    rand::thread_rng().fill_bytes(&mut key);

    let ciphertext = xor_bytes(&key, plaintext);

    (key, ciphertext)
}

/// Invert [`encrypt_once`].
///
/// The caller has to pass a key and ciphertext of equal length. Mismatched
/// lengths are not checked; the XOR simply stops at the shorter of the two.
#[must_use]
pub fn decrypt_once(key: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    xor_bytes(key, ciphertext)
}

//! Byte-buffer helpers for handling secret material.
//!
//! These helpers are consumed by [`Secret`](crate::Secret) and by embedding
//! applications; the redaction engine itself never depends on them.

use std::sync::atomic::{compiler_fence, Ordering};

/// Overwrites every byte of `buf` with zero.
///
/// Best effort: the crate forbids `unsafe`, so this relies on a compiler
/// fence rather than volatile writes to keep the stores from being elided.
/// It does not scrub copies the allocator or the OS may have made elsewhere.
///
/// # Examples
///
/// ```
/// let mut key = *b"super-secret";
/// redact_core::buffer::zeroize(&mut key);
/// assert!(key.iter().all(|&b| b == 0));
/// ```
pub fn zeroize(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = 0;
    }
    compiler_fence(Ordering::SeqCst);
}

/// Compares two byte slices without short-circuiting on the first difference.
///
/// The comparison time depends on the slice length but not on where the
/// slices differ, which blunts timing side channels when comparing secret
/// values such as tokens or MACs. Differing lengths return `false`
/// immediately; the length itself is not treated as secret.
///
/// # Examples
///
/// ```
/// use redact_core::buffer::constant_time_eq;
///
/// assert!(constant_time_eq(b"token-a", b"token-a"));
/// assert!(!constant_time_eq(b"token-a", b"token-b"));
/// assert!(!constant_time_eq(b"token-a", b"token-aa"));
/// ```
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_clears_every_byte() {
        let mut buf = vec![0xAAu8; 64];
        zeroize(&mut buf);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn zeroize_handles_empty_buffers() {
        let mut buf: Vec<u8> = Vec::new();
        zeroize(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }

    #[test]
    fn constant_time_eq_catches_single_bit_differences() {
        let a = [0b1010_1010u8; 32];
        let mut b = a;
        b[31] ^= 0b0000_0001;
        assert!(!constant_time_eq(&a, &b));
    }
}

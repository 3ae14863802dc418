// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Share-token generation.

/// Generates a fresh opaque share token.
///
/// 128 bits of randomness rendered as 32 hex characters. The token is a
/// bearer credential for the public read-only view; possession is the
/// only check, so it must be unguessable.
#[must_use]
pub fn generate_share_token() -> String {
    format!("{:032x}", rand::random::<u128>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_well_formed() {
        let first: String = generate_share_token();
        let second: String = generate_share_token();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}

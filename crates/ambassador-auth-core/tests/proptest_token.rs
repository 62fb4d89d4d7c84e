//! Property-based tests for session tokens
//!
//! These tests verify:
//! - Issued tokens resolve to the user they were issued for
//! - Arbitrary strings never panic the validator and are always rejected
//! - Any change to the signature segment is detected
//! - Short signing secrets are rejected at configuration time

use std::time::Duration;

use ambassador_auth_core::{AuthConfig, TokenCodec, TokenError};
use ambassador_types::UserId;
use proptest::prelude::*;

const SECRET: &[u8] = b"proptest-secret-proptest-secret!";
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

// ============================================================================
// Strategies
// ============================================================================

fn arb_garbage_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_-]{0,80}",
        "[a-zA-Z0-9_-]{1,20}\\.[a-zA-Z0-9_-]{1,20}\\.[a-zA-Z0-9_-]{1,20}",
        Just("..".to_string()),
        Just(".".to_string()),
        "[!@#$%^&*()]{1,30}",
        any::<String>(),
    ]
}

fn arb_short_secret() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..32)
        .prop_map(|bytes| bytes.iter().map(|b| (b % 94 + 33) as char).collect())
}

fn arb_long_secret() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 32..64)
        .prop_map(|bytes| bytes.iter().map(|b| (b % 94 + 33) as char).collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: validate(issue(u)) == u
    #[test]
    fn prop_issued_token_resolves_to_user(id in any::<i64>()) {
        let codec = TokenCodec::new(SECRET, DAY);
        let issued = codec.issue(UserId(id)).unwrap();
        prop_assert_eq!(codec.validate(&issued.token), Ok(UserId(id)));
    }

    /// Property: arbitrary input never validates and never panics
    #[test]
    fn prop_garbage_rejected(token in arb_garbage_token()) {
        let codec = TokenCodec::new(SECRET, DAY);
        prop_assert!(codec.validate(&token).is_err());
    }

    /// Property: replacing any signature character is detected
    #[test]
    fn prop_signature_tampering_detected(id in any::<i64>(), position in any::<prop::sample::Index>()) {
        let codec = TokenCodec::new(SECRET, DAY);
        let issued = codec.issue(UserId(id)).unwrap();

        let (head, signature) = issued.token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        let i = position.index(chars.len());
        chars[i] = if chars[i] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{head}.{}", chars.into_iter().collect::<String>());

        prop_assert!(tampered != issued.token);
        let result = codec.validate(&tampered);
        prop_assert!(
            matches!(result, Err(TokenError::BadSignature) | Err(TokenError::Malformed)),
            "tampered token accepted: {:?}", result
        );
    }

    /// Property: secrets under 32 bytes are refused
    #[test]
    fn prop_short_secret_rejected(secret in arb_short_secret()) {
        prop_assert!(AuthConfig::try_new(secret).is_err());
    }

    /// Property: secrets of 32 bytes or more are accepted
    #[test]
    fn prop_long_secret_accepted(secret in arb_long_secret()) {
        prop_assert!(AuthConfig::try_new(secret).is_ok());
    }
}

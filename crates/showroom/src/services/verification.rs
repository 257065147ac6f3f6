//! Verification codes and their delivery.
//!
//! The page fakes an email round trip: issuing a code records it next to
//! the identifier it was issued for, and "sending" hands the pair to a
//! [`VerificationDelivery`] that surfaces it to the visitor.

use rand::Rng;

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Generate a 6-digit verification code.
#[must_use]
pub fn generate_verification_code() -> String {
    let code: u32 = rand::rng().random_range(100_000..1_000_000);
    code.to_string()
}

/// The single in-flight verification, if any.
///
/// At most one (identifier, code) pair is pending at a time; issuing a
/// code for anyone, same identifier or not, replaces it. Never persisted:
/// a page reload forgets the pending code and the visitor requests a new
/// one.
#[derive(Debug, Default)]
pub struct VerificationState {
    pending: Option<PendingCode>,
}

#[derive(Debug)]
struct PendingCode {
    email: String,
    code: String,
}

impl VerificationState {
    /// Create a state with no pending verification.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Issue a fresh code for `email`, replacing any pending pair.
    ///
    /// Returns the code so the caller can hand it to delivery.
    pub fn issue(&mut self, email: &str) -> String {
        let code = generate_verification_code();
        self.pending = Some(PendingCode {
            email: email.to_owned(),
            code: code.clone(),
        });
        code
    }

    /// Consume the pending code if `supplied` matches it exactly.
    ///
    /// On a match the pair is cleared and the identifier it was issued for
    /// is returned. On a miss, wrong code or nothing pending, the pair is
    /// left as it was.
    pub fn consume(&mut self, supplied: &str) -> Option<String> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.code == supplied)
        {
            return self.pending.take().map(|pending| pending.email);
        }
        None
    }

    /// Identifier the pending code was issued for, if any.
    #[must_use]
    pub fn pending_email(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.email.as_str())
    }
}

/// Delivery seam for verification codes.
///
/// Stands in for an email service: implementations surface the pair to the
/// visitor however the embedding UI wants. Delivery itself cannot fail; a
/// mock email always arrives.
pub trait VerificationDelivery {
    /// Surface `code` for `email` to the visitor.
    fn deliver_code(&self, email: &str, code: &str);
}

/// Delivery that logs the code in place of a mail transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDelivery;

impl VerificationDelivery for LoggingDelivery {
    fn deliver_code(&self, email: &str, code: &str) {
        tracing::info!(
            email = %email,
            code = %code,
            "no mail transport - verification code logged"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_verification_code_format() {
        let code = generate_verification_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_verification_code_range() {
        for _ in 0..100 {
            let code: u32 = generate_verification_code().parse().expect("valid number");
            assert!(code >= 100_000);
            assert!(code < 1_000_000);
        }
    }

    #[test]
    fn test_issue_records_pending_email() {
        let mut state = VerificationState::new();
        assert_eq!(state.pending_email(), None);

        state.issue("kai@example.com");
        assert_eq!(state.pending_email(), Some("kai@example.com"));
    }

    #[test]
    fn test_consume_matching_code_clears_pending() {
        let mut state = VerificationState::new();
        let code = state.issue("kai@example.com");

        assert_eq!(state.consume(&code), Some("kai@example.com".to_owned()));
        assert_eq!(state.pending_email(), None);
        // One-time use: the same code does nothing afterwards.
        assert_eq!(state.consume(&code), None);
    }

    #[test]
    fn test_consume_wrong_code_keeps_pending() {
        let mut state = VerificationState::new();
        let code = state.issue("kai@example.com");

        // Generated codes start at 100000, so this can never match.
        assert_eq!(state.consume("000000"), None);
        assert_eq!(state.pending_email(), Some("kai@example.com"));
        assert_eq!(state.consume(&code), Some("kai@example.com".to_owned()));
    }

    #[test]
    fn test_consume_with_nothing_pending() {
        let mut state = VerificationState::new();
        assert_eq!(state.consume("123456"), None);
    }

    #[test]
    fn test_issue_replaces_pending_pair() {
        let mut state = VerificationState::new();
        let first = state.issue("a@example.com");
        let second = state.issue("b@example.com");

        assert_eq!(state.pending_email(), Some("b@example.com"));
        if first != second {
            assert_eq!(state.consume(&first), None);
        }
        assert_eq!(state.consume(&second), Some("b@example.com".to_owned()));
    }
}

//! Hidden credential pair recognized by the login form.
//!
//! Entering the pair flips the page into its easter-egg overlay without
//! touching the account store or the session marker.

/// Email half of the hidden pair (matched ignoring ASCII case).
pub const EASTER_EGG_EMAIL: &str = "delorean@apexgt.dev";

/// Password half of the hidden pair (matched exactly).
pub const EASTER_EGG_PASSWORD: &str = "88mph";

/// Check whether the entered credentials are the hidden pair.
#[must_use]
pub fn matches(email: &str, password: &str) -> bool {
    email.eq_ignore_ascii_case(EASTER_EGG_EMAIL) && password == EASTER_EGG_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_pair() {
        assert!(matches(EASTER_EGG_EMAIL, EASTER_EGG_PASSWORD));
    }

    #[test]
    fn test_email_ignores_case() {
        assert!(matches("DeLorean@ApexGT.dev", EASTER_EGG_PASSWORD));
        assert!(matches("DELOREAN@APEXGT.DEV", EASTER_EGG_PASSWORD));
    }

    #[test]
    fn test_password_is_case_sensitive() {
        assert!(!matches(EASTER_EGG_EMAIL, "88MPH"));
    }

    #[test]
    fn test_rejects_other_credentials() {
        assert!(!matches("kai@example.com", EASTER_EGG_PASSWORD));
        assert!(!matches(EASTER_EGG_EMAIL, "turbo"));
        assert!(!matches("", ""));
    }
}

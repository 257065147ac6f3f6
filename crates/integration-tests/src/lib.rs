//! Integration tests for the Apex GT showroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p apexgt-integration-tests
//! ```
//!
//! The tests drive the page state end to end: in-memory profiles for the
//! account-flow scenarios, temp-dir JSON profiles for persistence across
//! reopen. No browser, no server, no network.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;

use apexgt_showroom::services::verification::VerificationDelivery;

/// Delivery that records every (email, code) pair it is handed.
///
/// The scenario tests read the code back from here, the same way the
/// visitor reads it off the page.
#[derive(Clone, Default)]
pub struct RecordingDelivery {
    sent: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingDelivery {
    /// Create a delivery with nothing recorded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently delivered code, if any.
    #[must_use]
    pub fn last_code(&self) -> Option<String> {
        self.sent.borrow().last().map(|(_, code)| code.clone())
    }

    /// Every (email, code) pair delivered so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }

    /// Number of deliveries so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl VerificationDelivery for RecordingDelivery {
    fn deliver_code(&self, email: &str, code: &str) {
        self.sent
            .borrow_mut()
            .push((email.to_owned(), code.to_owned()));
    }
}

/// Initialize a tracing subscriber for test output.
///
/// Defaults to info level if `RUST_LOG` is not set. Safe to call from
/// every test; only the first call installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "apexgt_showroom=info".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

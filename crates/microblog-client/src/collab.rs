//! Identity and clock collaborators.
//!
//! Both are explicit handles passed into the client, never ambient globals,
//! so the write path is testable without a live environment.

use std::collections::HashSet;

use anchor_lang::prelude::Pubkey;

/// Proves that the caller holds the credential behind a claimed identity.
/// On a real cluster this is the transaction signature check; offline
/// implementations decide however suits the harness.
pub trait SignatureVerifier {
    fn verify_signature(&self, claimed: &Pubkey, payload: &[u8]) -> bool;
}

/// Trusted time source for `created_at` stamps. Monotonic enough for display
/// ordering, not for consensus-critical ordering.
pub trait UnixClock {
    /// Seconds since the Unix epoch.
    fn current_time(&self) -> i64;
}

/// Verifier backed by a fixed set of identities known to hold their
/// credentials. Intended for tests and local tooling.
#[derive(Default)]
pub struct AllowListVerifier {
    authorized: HashSet<Pubkey>,
}

impl AllowListVerifier {
    pub fn new<I: IntoIterator<Item = Pubkey>>(authorized: I) -> Self {
        Self {
            authorized: authorized.into_iter().collect(),
        }
    }
}

impl SignatureVerifier for AllowListVerifier {
    fn verify_signature(&self, claimed: &Pubkey, _payload: &[u8]) -> bool {
        self.authorized.contains(claimed)
    }
}

/// Wall-clock time via chrono.
pub struct SystemClock;

impl UnixClock for SystemClock {
    fn current_time(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Fixed clock for deterministic tests.
pub struct FixedClock(pub i64);

impl UnixClock for FixedClock {
    fn current_time(&self) -> i64 {
        self.0
    }
}

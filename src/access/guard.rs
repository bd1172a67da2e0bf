//! Access guard
//!
//! Evaluates inbound caller IPs against the configured allow-list. The guard
//! is built once at startup and is read-only afterward, so it can be shared
//! across request handlers without locking.

use crate::access::patterns::any_matches;
use crate::error::AccessDeniedError;
use tracing::trace;

/// Default allow-list: localhost only (IPv4 and IPv6 loopback).
pub const DEFAULT_ALLOWED_IPS: &[&str] = &["127.0.0.1", "::1"];

/// Result of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Caller matched an allow-list entry
    Allowed,
    /// No allow-list entry matched
    Denied,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Denied)
    }
}

/// IP allow-list guard
///
/// Every guarded request must pass [`AccessGuard::check`] before it is
/// dispatched; a denied caller gets a 403 and nothing else runs.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    allowed_ips: Vec<String>,
}

impl AccessGuard {
    /// Create a guard from an allow-list of IP patterns.
    pub fn new(allowed_ips: Vec<String>) -> Self {
        Self { allowed_ips }
    }

    /// Create a guard admitting localhost only.
    pub fn localhost_only() -> Self {
        Self::new(DEFAULT_ALLOWED_IPS.iter().map(|s| s.to_string()).collect())
    }

    /// Whether the allow-list contains the match-all entry `*`.
    pub fn admits_any(&self) -> bool {
        self.allowed_ips.iter().any(|p| p == "*")
    }

    /// The configured allow-list patterns.
    pub fn allowed_ips(&self) -> &[String] {
        &self.allowed_ips
    }

    /// Check whether a caller IP is admitted.
    ///
    /// Pure evaluation over the configured patterns; same input always
    /// yields the same decision.
    pub fn check(&self, caller_ip: &str) -> AccessDecision {
        let allowed = any_matches(&self.allowed_ips, caller_ip);
        trace!(ip = caller_ip, allowed, "Evaluated access check");
        if allowed {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied
        }
    }

    /// Convenience wrapper around [`check`](Self::check).
    pub fn is_allowed(&self, caller_ip: &str) -> bool {
        self.check(caller_ip).is_allowed()
    }

    /// Like [`check`](Self::check), but returns the canonical error for a
    /// denied caller so the server boundary can map it to a 403.
    pub fn require(&self, caller_ip: &str) -> Result<(), AccessDeniedError> {
        if self.is_allowed(caller_ip) {
            Ok(())
        } else {
            Err(AccessDeniedError::new(caller_ip))
        }
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::localhost_only()
    }
}

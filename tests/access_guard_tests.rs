//! Access guard integration tests
//!
//! Covers the allow-list matching rules end to end: exact entries, segment
//! wildcards, the universal wildcard, and the positional prefix semantics
//! for wildcards in other positions.

use codesmith::access::{AccessGuard, DEFAULT_ALLOWED_IPS, ip_matches};
use rstest::rstest;

fn guard(entries: &[&str]) -> AccessGuard {
    AccessGuard::new(entries.iter().map(|s| s.to_string()).collect())
}

#[rstest]
#[case("127.0.0.1")]
#[case("::1")]
#[case("10.0.0.5")]
#[case("anything")]
#[case("")]
fn universal_wildcard_admits_all(#[case] ip: &str) {
    assert!(guard(&["*"]).is_allowed(ip));
}

#[rstest]
#[case("127.0.0.1")]
#[case("::1")]
#[case("192.168.0.42")]
#[case("fe80::abcd")]
fn every_ip_matches_itself(#[case] ip: &str) {
    assert!(guard(&[ip]).is_allowed(ip));
}

#[test]
fn loopback_defaults_reject_remote_caller() {
    let guard = guard(DEFAULT_ALLOWED_IPS);
    assert!(!guard.is_allowed("10.0.0.5"));
    assert!(guard.is_allowed("127.0.0.1"));
    assert!(guard.is_allowed("::1"));
}

#[rstest]
#[case("192.168.0.42", true)]
#[case("192.168.0.1", true)]
#[case("192.168.1.1", false)]
#[case("10.0.0.5", false)]
#[case("192.168.0", false)]
fn segment_wildcard_is_prefix_match(#[case] ip: &str, #[case] expected: bool) {
    assert_eq!(guard(&["192.168.0.*"]).is_allowed(ip), expected);
}

#[test]
fn wildcard_at_position_zero_admits_all() {
    // Only the text before the first '*' is compared; a leading wildcard
    // therefore has an empty prefix and admits everything.
    let guard = guard(&["*suffix"]);
    assert!(guard.is_allowed("anything"));
    assert!(guard.is_allowed("10.0.0.5"));
}

#[test]
fn text_after_first_wildcard_is_ignored() {
    let guard = guard(&["192.*.0.1"]);
    assert!(guard.is_allowed("192.255.255.255"));
    assert!(!guard.is_allowed("193.168.0.1"));
}

#[test]
fn first_matching_entry_wins_but_order_is_irrelevant() {
    let a = guard(&["127.0.0.1", "192.168.0.*"]);
    let b = guard(&["192.168.0.*", "127.0.0.1"]);
    for ip in ["127.0.0.1", "192.168.0.9", "10.0.0.5"] {
        assert_eq!(a.is_allowed(ip), b.is_allowed(ip));
    }
}

#[test]
fn repeated_checks_are_stable() {
    let guard = guard(&["127.0.0.1", "::1"]);
    for _ in 0..10 {
        assert!(guard.is_allowed("127.0.0.1"));
        assert!(!guard.is_allowed("10.0.0.5"));
    }
}

#[rstest]
#[case("*", "whatever", true)]
#[case("::1", "::1", true)]
#[case("::1", "::2", false)]
#[case("fe80:*", "fe80::1", true)]
#[case("fe80:*", "fd00::1", false)]
#[case("", "", true)]
#[case("", "127.0.0.1", false)]
fn pattern_matrix(#[case] pattern: &str, #[case] ip: &str, #[case] expected: bool) {
    assert_eq!(ip_matches(pattern, ip), expected);
}

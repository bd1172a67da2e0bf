//! IP filter pattern matching
//!
//! An allow-list entry is either a literal IP address, an address with a
//! wildcard (e.g. `192.168.0.*`) to cover a network segment, or a bare `*`
//! matching everything.

/// Check whether a caller IP matches a single allow-list pattern.
///
/// Matching rules, in order:
/// - `*` matches any address
/// - an exact string match on the whole pattern
/// - for a pattern containing `*`, the bytes of `ip` up to the first `*`
///   must equal the pattern prefix; anything after the first `*` is ignored
///
/// The last rule is intentionally a positional prefix comparison, not glob
/// matching: `*.168.0.1` has its wildcard at position 0 and therefore
/// matches every address. Changing this would change which callers are
/// admitted, so the restriction is kept as-is.
///
/// No IP format validation happens here; both sides are opaque strings.
pub fn ip_matches(pattern: &str, ip: &str) -> bool {
    if pattern == "*" || pattern == ip {
        return true;
    }
    match pattern.find('*') {
        Some(pos) => ip.len() >= pos && ip.as_bytes()[..pos] == pattern.as_bytes()[..pos],
        None => false,
    }
}

/// Check a caller IP against an ordered allow-list.
///
/// Returns `true` on the first matching entry. A non-match is a normal
/// `false`, not an error; there are no deny entries, so ordering does not
/// affect the outcome.
pub fn any_matches<S: AsRef<str>>(patterns: &[S], ip: &str) -> bool {
    patterns.iter().any(|p| ip_matches(p.as_ref(), ip))
}

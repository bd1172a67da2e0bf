//! IP-based access control
//!
//! Because codesmith writes new code files on the host it runs on, it must
//! only ever be reachable from machines the developer trusts. By default the
//! service answers localhost only; the allow-list can be widened through
//! configuration.
//!
//! An allow-list entry is one of:
//! - an exact IP address (`127.0.0.1`, `::1`)
//! - an address with a wildcard covering a network segment (`192.168.0.*`)
//! - a bare `*` admitting every caller
//!
//! Wildcard entries compare only the text before the first `*`; see
//! [`patterns::ip_matches`] for the exact rules.
//!
//! ## Example Configuration
//!
//! ```toml
//! [access]
//! allowed_ips = ["127.0.0.1", "::1", "192.168.0.*"]
//! ```

pub mod guard;
pub mod patterns;

pub use guard::{AccessDecision, AccessGuard, DEFAULT_ALLOWED_IPS};
pub use patterns::ip_matches;

//! codesmith
//!
//! A development-only code scaffolding service with IP-based access control.
//!
//! codesmith holds a registry of code generators (model, CRUD, controller,
//! form, module) and serves them over a small local HTTP surface. Because
//! it generates new code files on the machine it runs on, every request is
//! gated by an IP allow-list that defaults to localhost.
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 19420
//!
//! [access]
//! allowed_ips = ["127.0.0.1", "::1", "192.168.0.*"]
//!
//! [generators.crud]
//! kind = "crud"
//! page_size = 50
//! ```
//!
//! ## Access Control Model
//!
//! An allow-list entry is an exact IP, an address with a wildcard covering
//! a network segment (`192.168.0.*`), or a bare `*` admitting everyone.
//! Wildcard entries compare only the text before the first `*`.
//!
//! ## Generator Registry
//!
//! The `[generators]` table is merged over the built-in set at startup;
//! an entry sharing a built-in's ID replaces it entirely. Any entry that
//! fails to construct aborts startup - a partial registry is never served.

pub mod access;
pub mod config;
pub mod error;
pub mod generators;
pub mod server;
pub mod util;

// Re-export main types
pub use access::{AccessDecision, AccessGuard};
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use generators::{Generator, GeneratorRegistry};

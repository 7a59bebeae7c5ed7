#![forbid(unsafe_code)]

//! fhr: Firebase Hosting Rules check for statically exported sites
//!
//! A statically exported site writes dynamic routes such as `/post/[id]` as
//! literal `/post/[id].html` files. Firebase Hosting only serves them if a
//! rewrite maps the URL glob `/post/*` onto that file. fhr translates every
//! dynamic route into the rewrite it needs and fails the build when any
//! requested hosting site lacks it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod logging;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, FhrError, GateError, RouteError};

// Re-export core domain types for convenient access
pub use hook::ExportHook;
pub use types::{RewriteRule, RoutePath, SiteId};

//! Configuration loading.
//!
//! Settings are layered: command-line flags take precedence over
//! environment variables, which take precedence over the TOML
//! configuration file, which sits on built-in defaults. The domain, the
//! record prefix and the API token are mandatory after merging.

pub mod constants;
pub mod errors;
pub mod methods;
pub mod types;

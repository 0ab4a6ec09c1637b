//! Client configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CONFIG_SERVICE_PREFIX overrides the file
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → HttpFetcher + ConfigStore
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - An unset prefix is not a load error; every fetch fails instead

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ClientConfig;
pub use schema::SERVICE_PREFIX_ENV;

//! Policy configuration.
//!
//! Policies are strongly typed with explicit defaults. Named TOML profiles
//! override defaults field by field (`#[serde(default)]`), never wholesale,
//! and are validated once at load time.

pub mod defaults;
mod policy;
mod profile_store;

pub use policy::{ExtractionMode, Policy};
pub use profile_store::PolicyStore;

//! Repository implementations module.
//!
//! - `local`: In-memory implementation backed by the loaded CSV extracts
pub mod local;

pub use local::LocalRepository;

//! Namespace → documentation base URL registries for cross-reference links.

pub mod config;
pub mod logging;

pub mod profile;
pub mod registry;
pub mod source;

pub use registry::{Entry, EntrySpec, MalformedReason, Registry, RegistryError};

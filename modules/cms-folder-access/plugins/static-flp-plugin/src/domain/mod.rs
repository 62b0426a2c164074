//! Domain layer for the static folder-level permissions plugin.

mod client;
pub mod service;

pub use service::Service;

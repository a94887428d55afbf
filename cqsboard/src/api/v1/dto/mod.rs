//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are kept
//! separate from the domain and view types in `src/models/` and `src/view/`
//! and only handle serialization and conversion.

pub mod dashboard;
pub mod uploads;

// Re-export all public types for convenient access via `dto::*`.
pub use dashboard::*;
pub use uploads::*;

//! Data models
//!
//! Server-owned entities as they appear on the wire. The backend uses
//! Spanish camelCase field names; serde renames keep the mapping in
//! one place. All IDs are `i64` and server-assigned.

pub mod invoice;
pub mod service_request;
pub mod ticket;

// Re-exports
pub use invoice::*;
pub use service_request::*;
pub use ticket::*;

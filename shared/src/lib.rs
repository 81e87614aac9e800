//! Shared types for the taller work-order system
//!
//! Wire-facing entities and request/response DTOs used by every
//! client-side consumer. The server owns all entities; the client only
//! holds transient, re-fetchable copies of them.

pub mod dto;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use dto::{
    CreateRequestPayload, FilteredInvoicesResponse, InvoiceFilter, NewWorkOrder,
    UpdateDescriptionPayload,
};
pub use models::{Invoice, PaymentStatus, Priority, ServiceRequest, Ticket};

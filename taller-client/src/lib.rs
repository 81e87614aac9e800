//! Taller Client - data layer for the work-order dashboard
//!
//! Typed, bearer-authenticated HTTP calls against the work-order API,
//! plus the list view-model, mutation dispatch, and form controllers
//! shared by every dashboard view.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod mutation;
pub mod session;

pub use api::{AdminApi, StaffApi, UserApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FieldError, InvoiceFilterForm, RequestForm, WorkOrderForm};
pub use http::{HttpTransport, NetworkHttpClient};
pub use list::{CollectionSource, Criteria, ListState, ListViewModel, NoFilter, PageWindow};
pub use mutation::{MutationSink, RequestMutation, WorkOrderMutation};
pub use session::{FileSessionStore, MemorySession, SessionProvider};

// Re-export shared types for convenience
pub use shared::dto::{
    CreateRequestPayload, InvoiceFilter, NewWorkOrder, RequestFilter, UpdateDescriptionPayload,
};
pub use shared::models::{Invoice, PaymentStatus, Priority, ServiceRequest, Ticket};

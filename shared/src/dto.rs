//! Request/response DTOs shared between the dashboard views and the API
//!
//! Payload field names follow the server contract (Spanish camelCase);
//! the serde renames are the single mapping table between local names
//! and wire names.

use crate::models::{Invoice, PaymentStatus, Priority};
use serde::{Deserialize, Serialize};

/// Admin work-order creation payload (POST api/admin/crear-solicitud)
///
/// The quote travels as a string with exactly two decimals, matching
/// what the dashboard always sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWorkOrder {
    pub username: String,
    #[serde(rename = "descripcionInicial")]
    pub initial_description: String,
    #[serde(rename = "prioridad")]
    pub priority: Priority,
    #[serde(rename = "cotizacion")]
    pub quote: String,
    #[serde(rename = "descripcionTrabajo")]
    pub work_description: String,
}

/// End-user request creation payload (POST api-user/crear-solicitud)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRequestPayload {
    #[serde(rename = "descripcionInicial")]
    pub initial_description: String,
    #[serde(rename = "prioridad")]
    pub priority: Priority,
}

/// Description edit payload (PUT api-user/modificar-solicitud/{id})
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateDescriptionPayload {
    #[serde(rename = "descripcionInicial")]
    pub initial_description: String,
}

/// Sparse invoice filter criteria (POST api/staff-cds/listado-con-filtros)
///
/// Only present keys are sent; absent keys impose no constraint. Dates
/// are already reformatted to `YYYY/MM/DD` by the form controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceFilter {
    #[serde(rename = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "estadoPago", skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

impl InvoiceFilter {
    /// True when no criteria field is set
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.username.is_none()
            && self.payment_status.is_none()
    }
}

/// Envelope on the filtered-invoice response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredInvoicesResponse {
    #[serde(default)]
    pub facturas: Vec<Invoice>,
}

/// End-user request-status filter (query string on filtrar-solicitudes)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<String>,
}

impl RequestFilter {
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        // An empty selection ("Todos") imposes no constraint
        self.status.as_deref().map_or(true, |s| s.is_empty())
    }
}

//! Invoice Model

use crate::models::Priority;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    PendientePago,
    ValorPagado,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::PendientePago => "PENDIENTE_PAGO",
            PaymentStatus::ValorPagado => "VALOR_PAGADO",
        }
    }
}

/// Invoice ("factura") entity, derived server-side from a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "facturaId")]
    pub id: i64,
    #[serde(rename = "ticketId")]
    pub ticket_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "prioridad")]
    pub priority: Option<Priority>,
    #[serde(rename = "descripcionInicial")]
    pub initial_description: Option<String>,
    #[serde(rename = "descripcionTrabajo")]
    pub work_description: Option<String>,
    #[serde(rename = "estadoTicket")]
    pub ticket_status: Option<String>,
    #[serde(rename = "cotizacion", with = "rust_decimal::serde::float_option", default)]
    pub quote: Option<Decimal>,
    #[serde(rename = "estadoPago")]
    pub payment_status: PaymentStatus,
    #[serde(rename = "fechaCreacion")]
    pub created_date: Option<String>,
}

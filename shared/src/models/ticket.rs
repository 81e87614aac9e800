//! Ticket Model

use serde::{Deserialize, Serialize};

/// Ticket entity - a job record created by staff from a service request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "solicitudId")]
    pub request_id: Option<i64>,
    /// Free-form server status string
    #[serde(rename = "estado")]
    pub status: Option<String>,
    #[serde(rename = "descripcionInicial")]
    pub initial_description: Option<String>,
    #[serde(rename = "descripcionTrabajo")]
    pub work_description: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_date: Option<String>,
    #[serde(rename = "horaCreacion")]
    pub created_time: Option<String>,
}

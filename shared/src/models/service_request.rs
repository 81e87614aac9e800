//! Service Request Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Work priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baja,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Alta => "ALTA",
            Priority::Media => "MEDIA",
            Priority::Baja => "BAJA",
        }
    }
}

/// Service request ("solicitud") entity
///
/// Status and quote-acceptance state are free-form server strings; the
/// quote is absent until staff provides one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(rename = "idSolicitud")]
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "descripcionInicial")]
    pub initial_description: Option<String>,
    #[serde(rename = "descripcionTrabajo")]
    pub work_description: Option<String>,
    #[serde(rename = "estado")]
    pub status: Option<String>,
    #[serde(rename = "prioridad")]
    pub priority: Priority,
    /// Quoted price, two-digit precision once present
    #[serde(rename = "cotizacion", with = "rust_decimal::serde::float_option", default)]
    pub quote: Option<Decimal>,
    #[serde(rename = "cotizacionAceptada")]
    pub quote_acceptance: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_date: Option<String>,
    #[serde(rename = "horaCreacion")]
    pub created_time: Option<String>,
    #[serde(rename = "pago")]
    pub payment_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_wire_format() {
        assert_eq!(serde_json::to_string(&Priority::Alta).unwrap(), "\"ALTA\"");
        let p: Priority = serde_json::from_str("\"BAJA\"").unwrap();
        assert_eq!(p, Priority::Baja);
    }

    #[test]
    fn deserializes_server_fields() {
        let raw = serde_json::json!({
            "idSolicitud": 7,
            "username": "jlopez",
            "descripcionInicial": "Frenos desgastados",
            "descripcionTrabajo": null,
            "estado": "PENDIENTE",
            "prioridad": "MEDIA",
            "cotizacion": 150.50,
            "cotizacionAceptada": "PENDIENTE",
            "fechaCreacion": "2024-11-02",
            "horaCreacion": "10:45:00",
            "pago": "PENDIENTE_PAGO"
        });
        let req: ServiceRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.priority, Priority::Media);
        assert_eq!(req.quote, Some(Decimal::new(15050, 2)));
        assert_eq!(req.work_description, None);
    }

    #[test]
    fn quote_may_be_absent() {
        let raw = serde_json::json!({
            "idSolicitud": 1,
            "descripcionInicial": "Cambio de aceite",
            "descripcionTrabajo": null,
            "estado": "PENDIENTE",
            "prioridad": "BAJA",
            "cotizacion": null,
            "cotizacionAceptada": null,
            "fechaCreacion": null,
            "horaCreacion": null,
            "pago": null
        });
        let req: ServiceRequest = serde_json::from_value(raw).unwrap();
        assert!(req.quote.is_none());
    }
}

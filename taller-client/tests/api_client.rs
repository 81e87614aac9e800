// Role-scoped API behavior against a mock transport.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use taller_client::{
    AdminApi, ClientError, ClientResult, HttpTransport, ListState, ListViewModel, MemorySession,
    RequestMutation, SessionProvider, StaffApi, UserApi,
};

/// Canned-response transport that records every issued call
#[derive(Default)]
struct MockTransport {
    responses: HashMap<String, serde_json::Value>,
    bytes: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    fn respond(mut self, key: &str, value: serde_json::Value) -> Self {
        self.responses.insert(key.to_string(), value);
        self
    }

    fn respond_bytes(mut self, key: &str, value: Vec<u8>) -> Self {
        self.bytes.insert(key.to_string(), value);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup<T: DeserializeOwned>(&self, key: &str) -> ClientResult<T> {
        let value = self.responses.get(key).ok_or_else(|| ClientError::Server {
            status: http::StatusCode::NOT_FOUND,
            message: None,
        })?;
        serde_json::from_value(value.clone())
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str, _token: &str) -> ClientResult<T> {
        let key = format!("GET {path}");
        self.record(key.clone());
        self.lookup(&key)
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        _token: &str,
    ) -> ClientResult<T> {
        let qs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let key = format!("GET {path}?{}", qs.join("&"));
        self.record(key.clone());
        self.lookup(&key)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        _body: &B,
        _token: &str,
    ) -> ClientResult<T> {
        let key = format!("POST {path}");
        self.record(key.clone());
        self.lookup(&key)
    }

    async fn post_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        _body: &B,
        _token: &str,
    ) -> ClientResult<()> {
        self.record(format!("POST {path}"));
        Ok(())
    }

    async fn post_bytes(&self, path: &str, _token: &str) -> ClientResult<Vec<u8>> {
        let key = format!("POST {path}");
        self.record(key.clone());
        self.bytes.get(&key).cloned().ok_or(ClientError::Server {
            status: http::StatusCode::NOT_FOUND,
            message: None,
        })
    }

    async fn put_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        _body: &B,
        _token: &str,
    ) -> ClientResult<()> {
        self.record(format!("PUT {path}"));
        Ok(())
    }

    async fn put_empty(&self, path: &str, _token: &str) -> ClientResult<()> {
        self.record(format!("PUT {path}"));
        Ok(())
    }

    async fn delete_unit(&self, path: &str, _token: &str) -> ClientResult<()> {
        self.record(format!("DELETE {path}"));
        Ok(())
    }
}

fn session_with_token() -> Arc<dyn SessionProvider> {
    Arc::new(MemorySession::with_token("tok"))
}

fn absent_session() -> Arc<dyn SessionProvider> {
    Arc::new(MemorySession::absent())
}

fn request_history_json() -> serde_json::Value {
    serde_json::json!([
        {
            "idSolicitud": 1,
            "descripcionInicial": "Frenos desgastados",
            "descripcionTrabajo": "Cambio de pastillas",
            "estado": "ACEPTADA",
            "prioridad": "ALTA",
            "cotizacion": 19.50,
            "cotizacionAceptada": "PENDIENTE",
            "fechaCreacion": "2024-11-02",
            "horaCreacion": "10:45:00",
            "pago": "PENDIENTE_PAGO"
        },
        {
            "idSolicitud": 2,
            "descripcionInicial": "Cambio de aceite",
            "descripcionTrabajo": null,
            "estado": "PENDIENTE",
            "prioridad": "BAJA",
            "cotizacion": null,
            "cotizacionAceptada": null,
            "fechaCreacion": null,
            "horaCreacion": null,
            "pago": null
        }
    ])
}

#[tokio::test]
async fn missing_token_aborts_before_any_network_call() {
    let transport = Arc::new(MockTransport::default());
    let api = UserApi::new(transport.clone(), absent_session());

    let err = api.request_history().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingSession));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn missing_token_puts_view_in_error_state() {
    let transport = Arc::new(MockTransport::default());
    let api = UserApi::new(transport.clone(), absent_session());
    let mut view = ListViewModel::new(api);

    assert!(view.load().await.is_err());
    match view.state() {
        ListState::Error(msg) => assert!(msg.starts_with("Sesión expirada")),
        other => panic!("expected error state, got {other:?}"),
    }
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn request_history_maps_wire_fields() {
    let transport = Arc::new(
        MockTransport::default()
            .respond("GET api-user/historial-solicitud", request_history_json()),
    );
    let api = UserApi::new(transport, session_with_token());

    let requests = api.request_history().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, 1);
    assert_eq!(
        requests[0].initial_description.as_deref(),
        Some("Frenos desgastados")
    );
    assert_eq!(requests[0].quote.map(|q| q.to_string()), Some("19.5".to_string()));
    assert!(requests[1].quote.is_none());
}

#[tokio::test]
async fn status_filter_travels_as_query_parameter() {
    let transport = Arc::new(MockTransport::default().respond(
        "GET api-user/filtrar-solicitudes?estado=ACEPTADA",
        serde_json::json!([]),
    ));
    let api = UserApi::new(transport.clone(), session_with_token());

    let filtered = api
        .filter_requests(&taller_client::RequestFilter::by_status("ACEPTADA"))
        .await
        .unwrap();
    assert!(filtered.is_empty());
    assert_eq!(
        transport.calls(),
        vec!["GET api-user/filtrar-solicitudes?estado=ACEPTADA".to_string()]
    );
}

#[tokio::test]
async fn accept_quote_mutation_refetches_history() {
    let transport = Arc::new(
        MockTransport::default()
            .respond("GET api-user/historial-solicitud", request_history_json()),
    );
    let api = UserApi::new(transport.clone(), session_with_token());
    let mut view = ListViewModel::new(api);
    view.load().await.unwrap();

    view.mutate(RequestMutation::AcceptQuote { id: 1 })
        .await
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            "GET api-user/historial-solicitud".to_string(),
            "PUT api-user/aceptar-cotizacion/1".to_string(),
            "GET api-user/historial-solicitud".to_string(),
        ]
    );
}

#[tokio::test]
async fn admin_lists_usernames_and_tickets() {
    let transport = Arc::new(
        MockTransport::default()
            .respond(
                "GET api/admin/lista-nombres-usuarios",
                serde_json::json!(["jlopez", "mgarcia"]),
            )
            .respond(
                "GET api/admin/historial-tickets",
                serde_json::json!([{
                    "id": 4,
                    "username": "jlopez",
                    "solicitudId": 9,
                    "estado": "TRABAJO_PENDIENTE",
                    "descripcionInicial": "Frenos",
                    "descripcionTrabajo": "Pastillas nuevas",
                    "fechaCreacion": "2024-11-03",
                    "horaCreacion": "09:00:00"
                }]),
            ),
    );
    let api = AdminApi::new(transport, session_with_token());

    let usernames = api.list_usernames().await.unwrap();
    assert_eq!(usernames, vec!["jlopez", "mgarcia"]);

    let tickets = api.ticket_history().await.unwrap();
    assert_eq!(tickets[0].id, 4);
    assert_eq!(tickets[0].request_id, Some(9));
}

#[tokio::test]
async fn filtered_invoices_unwrap_the_envelope() {
    let transport = Arc::new(MockTransport::default().respond(
        "POST api/staff-cds/listado-con-filtros",
        serde_json::json!({
            "facturas": [{
                "facturaId": 31,
                "ticketId": 12,
                "username": "mgarcia",
                "prioridad": "ALTA",
                "descripcionInicial": "Ruido",
                "descripcionTrabajo": "Amortiguadores",
                "estadoTicket": "TRABAJO_TERMINADO",
                "cotizacion": 320.0,
                "estadoPago": "PENDIENTE_PAGO",
                "fechaCreacion": "2024-11-05"
            }]
        }),
    ));
    let api = StaffApi::new(transport, session_with_token());

    let invoices = api
        .filter_invoices(&taller_client::InvoiceFilter {
            username: Some("mgarcia".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].id, 31);
}

#[tokio::test]
async fn pdf_download_writes_facturas_pdf() {
    let transport = Arc::new(
        MockTransport::default()
            .respond_bytes("POST api/staff-cds/descargar-pdf", b"%PDF-1.4 fake".to_vec()),
    );
    let api = StaffApi::new(transport, session_with_token());

    let dir = tempfile::TempDir::new().unwrap();
    let path = api.save_invoices_pdf(dir.path()).await.unwrap();
    assert_eq!(path.file_name().unwrap(), "facturas.pdf");
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
}

//! End-user dashboard API

use crate::api::require_token;
use crate::http::HttpTransport;
use crate::list::CollectionSource;
use crate::mutation::{MutationSink, RequestMutation};
use crate::{ClientResult, SessionProvider};
use async_trait::async_trait;
use shared::dto::{CreateRequestPayload, RequestFilter, UpdateDescriptionPayload};
use shared::models::ServiceRequest;
use std::sync::Arc;

/// Endpoints scoped to the logged-in end-user
pub struct UserApi<C: HttpTransport> {
    transport: Arc<C>,
    session: Arc<dyn SessionProvider>,
}

impl<C: HttpTransport> UserApi<C> {
    pub fn new(transport: Arc<C>, session: Arc<dyn SessionProvider>) -> Self {
        Self { transport, session }
    }

    /// The user's full request history
    pub async fn request_history(&self) -> ClientResult<Vec<ServiceRequest>> {
        let token = require_token(&self.session)?;
        self.transport
            .get("api-user/historial-solicitud", &token)
            .await
    }

    /// Server-side filter by request status
    pub async fn filter_requests(
        &self,
        filter: &RequestFilter,
    ) -> ClientResult<Vec<ServiceRequest>> {
        let token = require_token(&self.session)?;
        let estado = filter.status.clone().unwrap_or_default();
        self.transport
            .get_with_query(
                "api-user/filtrar-solicitudes",
                &[("estado", estado)],
                &token,
            )
            .await
    }

    /// Submit a new service request
    pub async fn create_request(&self, payload: &CreateRequestPayload) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        self.transport
            .post_unit("api-user/crear-solicitud", payload, &token)
            .await
    }

    /// Accept the quoted price for a request
    pub async fn accept_quote(&self, id: i64) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        self.transport
            .put_empty(&format!("api-user/aceptar-cotizacion/{id}"), &token)
            .await
    }

    /// Reject the quoted price for a request
    pub async fn reject_quote(&self, id: i64) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        self.transport
            .put_empty(&format!("api-user/rechazar-cotizacion/{id}"), &token)
            .await
    }

    /// Replace the initial description of a request
    pub async fn update_description(
        &self,
        id: i64,
        payload: &UpdateDescriptionPayload,
    ) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        self.transport
            .put_unit(&format!("api-user/modificar-solicitud/{id}"), payload, &token)
            .await
    }

    /// Delete a request
    pub async fn delete_request(&self, id: i64) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        self.transport
            .delete_unit(&format!("api-user/eliminar-solicitud/{id}"), &token)
            .await
    }
}

#[async_trait]
impl<C: HttpTransport> CollectionSource for UserApi<C> {
    type Item = ServiceRequest;
    type Filter = RequestFilter;

    async fn fetch_all(&self) -> ClientResult<Vec<ServiceRequest>> {
        self.request_history().await
    }

    async fn fetch_filtered(&self, filter: &RequestFilter) -> ClientResult<Vec<ServiceRequest>> {
        self.filter_requests(filter).await
    }
}

#[async_trait]
impl<C: HttpTransport> MutationSink<RequestMutation> for UserApi<C> {
    async fn apply(&self, mutation: RequestMutation) -> ClientResult<()> {
        match mutation {
            RequestMutation::Create(payload) => self.create_request(&payload).await,
            RequestMutation::UpdateDescription { id, payload } => {
                self.update_description(id, &payload).await
            }
            RequestMutation::Delete { id } => self.delete_request(id).await,
            RequestMutation::AcceptQuote { id } => self.accept_quote(id).await,
            RequestMutation::RejectQuote { id } => self.reject_quote(id).await,
        }
    }
}

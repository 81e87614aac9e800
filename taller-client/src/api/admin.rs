//! Admin dashboard API

use crate::api::require_token;
use crate::http::HttpTransport;
use crate::list::{CollectionSource, NoFilter};
use crate::mutation::{MutationSink, WorkOrderMutation};
use crate::{ClientResult, SessionProvider};
use async_trait::async_trait;
use shared::dto::NewWorkOrder;
use shared::models::Ticket;
use std::sync::Arc;

/// Endpoints available to the admin role
pub struct AdminApi<C: HttpTransport> {
    transport: Arc<C>,
    session: Arc<dyn SessionProvider>,
}

impl<C: HttpTransport> AdminApi<C> {
    pub fn new(transport: Arc<C>, session: Arc<dyn SessionProvider>) -> Self {
        Self { transport, session }
    }

    /// Usernames selectable in the work-order creation form
    pub async fn list_usernames(&self) -> ClientResult<Vec<String>> {
        let token = require_token(&self.session)?;
        self.transport
            .get("api/admin/lista-nombres-usuarios", &token)
            .await
    }

    /// Full ticket history
    pub async fn ticket_history(&self) -> ClientResult<Vec<Ticket>> {
        let token = require_token(&self.session)?;
        self.transport
            .get("api/admin/historial-tickets", &token)
            .await
    }

    /// Register a work order on behalf of a user
    pub async fn create_work_order(&self, payload: &NewWorkOrder) -> ClientResult<()> {
        let token = require_token(&self.session)?;
        tracing::debug!(username = %payload.username, "Creating work order");
        self.transport
            .post_unit("api/admin/crear-solicitud", payload, &token)
            .await
    }
}

#[async_trait]
impl<C: HttpTransport> CollectionSource for AdminApi<C> {
    type Item = Ticket;
    type Filter = NoFilter;

    async fn fetch_all(&self) -> ClientResult<Vec<Ticket>> {
        self.ticket_history().await
    }

    async fn fetch_filtered(&self, _filter: &NoFilter) -> ClientResult<Vec<Ticket>> {
        // No server-side ticket filter exists
        self.ticket_history().await
    }
}

#[async_trait]
impl<C: HttpTransport> MutationSink<WorkOrderMutation> for AdminApi<C> {
    async fn apply(&self, mutation: WorkOrderMutation) -> ClientResult<()> {
        match mutation {
            WorkOrderMutation::Create(payload) => self.create_work_order(&payload).await,
        }
    }
}

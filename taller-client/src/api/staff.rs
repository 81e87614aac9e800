//! Service-center staff API

use crate::api::require_token;
use crate::http::HttpTransport;
use crate::list::CollectionSource;
use crate::{ClientResult, SessionProvider};
use async_trait::async_trait;
use shared::dto::{FilteredInvoicesResponse, InvoiceFilter};
use shared::models::Invoice;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name used for the invoice report download
pub const INVOICE_PDF_NAME: &str = "facturas.pdf";

/// Endpoints available to service-center staff
pub struct StaffApi<C: HttpTransport> {
    transport: Arc<C>,
    session: Arc<dyn SessionProvider>,
}

impl<C: HttpTransport> StaffApi<C> {
    pub fn new(transport: Arc<C>, session: Arc<dyn SessionProvider>) -> Self {
        Self { transport, session }
    }

    /// Full invoice listing
    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        let token = require_token(&self.session)?;
        self.transport
            .get("api/staff-cds/listado-facturas", &token)
            .await
    }

    /// Server-side filtered listing; only set criteria fields travel
    pub async fn filter_invoices(&self, filter: &InvoiceFilter) -> ClientResult<Vec<Invoice>> {
        let token = require_token(&self.session)?;
        let response: FilteredInvoicesResponse = self
            .transport
            .post("api/staff-cds/listado-con-filtros", filter, &token)
            .await?;
        Ok(response.facturas)
    }

    /// Invoice report as a PDF byte stream
    pub async fn download_invoices_pdf(&self) -> ClientResult<Vec<u8>> {
        let token = require_token(&self.session)?;
        self.transport
            .post_bytes("api/staff-cds/descargar-pdf", &token)
            .await
    }

    /// Download the invoice report and write it as `facturas.pdf`
    /// under `dir`, returning the written path.
    pub async fn save_invoices_pdf(&self, dir: &Path) -> ClientResult<PathBuf> {
        let bytes = self.download_invoices_pdf().await?;
        let path = dir.join(INVOICE_PDF_NAME);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| crate::ClientError::InvalidResponse(e.to_string()))?;
        tracing::info!(path = %path.display(), size = bytes.len(), "Invoice PDF saved");
        Ok(path)
    }
}

#[async_trait]
impl<C: HttpTransport> CollectionSource for StaffApi<C> {
    type Item = Invoice;
    type Filter = InvoiceFilter;

    async fn fetch_all(&self) -> ClientResult<Vec<Invoice>> {
        self.list_invoices().await
    }

    async fn fetch_filtered(&self, filter: &InvoiceFilter) -> ClientResult<Vec<Invoice>> {
        self.filter_invoices(filter).await
    }
}

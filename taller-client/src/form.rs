//! Form controllers
//!
//! Per-entity input state with required-field validation. A rejected
//! validation never reaches the transport; a successful submission
//! resets the fields and sets a success banner, while a failed one
//! preserves the entered values and surfaces the server message (or a
//! localized fallback).

use crate::list::{CollectionSource, ListViewModel};
use crate::mutation::{MutationSink, RequestMutation, WorkOrderMutation};
use crate::{ClientError, ClientResult};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::dto::{CreateRequestPayload, InvoiceFilter, NewWorkOrder};
use shared::models::{PaymentStatus, Priority};

/// Inline validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "Este campo es obligatorio.".to_string(),
        }
    }
}

fn first_to_client_error(errors: &[FieldError]) -> ClientError {
    let first = &errors[0];
    ClientError::Validation {
        field: first.field.to_string(),
        reason: first.reason.clone(),
    }
}

/// Parse a quote input and normalize it to exactly two decimals
/// ("19.5" becomes "19.50"). The amount must be a non-negative finite
/// decimal.
pub fn normalize_quote(input: &str) -> Result<String, String> {
    let amount: Decimal = input
        .trim()
        .parse()
        .map_err(|_| "La cotización debe ser un número válido.".to_string())?;
    if amount.is_sign_negative() {
        return Err("La cotización no puede ser negativa.".to_string());
    }
    // Half-up like the dashboard's toFixed(2), not banker's rounding
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{rounded:.2}"))
}

/// Reformat a date input (`YYYY-MM-DD`) to the server's `YYYY/MM/DD`
fn reformat_date(input: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.format("%Y/%m/%d").to_string())
        .map_err(|_| "Fecha inválida.".to_string())
}

/// Admin work-order registration form
///
/// All five fields are required; the quote is normalized before the
/// payload is shaped.
#[derive(Debug, Clone, Default)]
pub struct WorkOrderForm {
    pub username: String,
    pub initial_description: String,
    pub priority: Priority,
    pub quote: String,
    pub work_description: String,

    pub field_errors: Vec<FieldError>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl WorkOrderForm {
    pub fn validate(&self) -> Result<NewWorkOrder, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.username.trim().is_empty() {
            errors.push(FieldError::required("username"));
        }
        if self.initial_description.trim().is_empty() {
            errors.push(FieldError::required("initial_description"));
        }
        if self.work_description.trim().is_empty() {
            errors.push(FieldError::required("work_description"));
        }

        let quote = if self.quote.trim().is_empty() {
            errors.push(FieldError::required("quote"));
            None
        } else {
            match normalize_quote(&self.quote) {
                Ok(normalized) => Some(normalized),
                Err(reason) => {
                    errors.push(FieldError {
                        field: "quote",
                        reason,
                    });
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewWorkOrder {
            username: self.username.trim().to_string(),
            initial_description: self.initial_description.trim().to_string(),
            priority: self.priority,
            quote: quote.unwrap_or_default(),
            work_description: self.work_description.trim().to_string(),
        })
    }

    /// Validate, dispatch the creation, and on success reset the form
    pub async fn submit<S>(&mut self, view: &mut ListViewModel<S>) -> ClientResult<()>
    where
        S: CollectionSource + MutationSink<WorkOrderMutation>,
    {
        self.success_message = None;
        self.error_message = None;
        self.field_errors.clear();

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                let banner = if errors.iter().any(|e| e.reason == "Este campo es obligatorio.") {
                    "Todos los campos son obligatorios.".to_string()
                } else {
                    errors[0].reason.clone()
                };
                self.error_message = Some(banner);
                let err = first_to_client_error(&errors);
                self.field_errors = errors;
                return Err(err);
            }
        };

        match view.mutate(WorkOrderMutation::Create(payload)).await {
            Ok(()) => {
                *self = Self::default();
                self.success_message = Some("Trabajo registrado exitosamente.".to_string());
                Ok(())
            }
            Err(err) => {
                self.error_message =
                    Some(err.user_message("Error al registrar el trabajo. Inténtalo de nuevo."));
                Err(err)
            }
        }
    }
}

/// End-user service request form
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub initial_description: String,
    pub priority: Priority,

    pub field_errors: Vec<FieldError>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl RequestForm {
    pub fn validate(&self) -> Result<CreateRequestPayload, Vec<FieldError>> {
        if self.initial_description.trim().is_empty() {
            return Err(vec![FieldError {
                field: "initial_description",
                reason: "La descripción es requerida.".to_string(),
            }]);
        }

        Ok(CreateRequestPayload {
            initial_description: self.initial_description.trim().to_string(),
            priority: self.priority,
        })
    }

    pub async fn submit<S>(&mut self, view: &mut ListViewModel<S>) -> ClientResult<()>
    where
        S: CollectionSource + MutationSink<RequestMutation>,
    {
        self.success_message = None;
        self.error_message = None;
        self.field_errors.clear();

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                let err = first_to_client_error(&errors);
                self.error_message = Some(errors[0].reason.clone());
                self.field_errors = errors;
                return Err(err);
            }
        };

        match view.mutate(RequestMutation::Create(payload)).await {
            Ok(()) => {
                *self = Self::default();
                self.success_message = Some("Solicitud enviada exitosamente.".to_string());
                Ok(())
            }
            Err(err) => {
                self.error_message = Some(err.user_message("Error al enviar la solicitud."));
                Err(err)
            }
        }
    }
}

/// Staff invoice filter form; every field is optional
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilterForm {
    pub start_date: String,
    pub end_date: String,
    pub username: String,
    pub payment_status: Option<PaymentStatus>,

    pub field_errors: Vec<FieldError>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl InvoiceFilterForm {
    /// Shape the sparse criteria, reformatting dates to `YYYY/MM/DD`
    pub fn criteria(&self) -> Result<InvoiceFilter, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut filter = InvoiceFilter::default();

        if !self.start_date.trim().is_empty() {
            match reformat_date(self.start_date.trim()) {
                Ok(date) => filter.start_date = Some(date),
                Err(reason) => errors.push(FieldError {
                    field: "start_date",
                    reason,
                }),
            }
        }
        if !self.end_date.trim().is_empty() {
            match reformat_date(self.end_date.trim()) {
                Ok(date) => filter.end_date = Some(date),
                Err(reason) => errors.push(FieldError {
                    field: "end_date",
                    reason,
                }),
            }
        }
        if !self.username.trim().is_empty() {
            filter.username = Some(self.username.trim().to_string());
        }
        filter.payment_status = self.payment_status;

        if errors.is_empty() {
            Ok(filter)
        } else {
            Err(errors)
        }
    }

    /// Run the server-side filtered fetch on the invoice view
    pub async fn apply<S>(&mut self, view: &mut ListViewModel<S>) -> ClientResult<()>
    where
        S: CollectionSource<Filter = InvoiceFilter>,
    {
        self.success_message = None;
        self.error_message = None;
        self.field_errors.clear();

        let criteria = match self.criteria() {
            Ok(criteria) => criteria,
            Err(errors) => {
                let err = first_to_client_error(&errors);
                self.error_message = Some(errors[0].reason.clone());
                self.field_errors = errors;
                return Err(err);
            }
        };

        match view.apply_filter(&criteria).await {
            Ok(()) => {
                self.success_message = Some("Facturas filtradas con éxito.".to_string());
                Ok(())
            }
            Err(err) => {
                self.error_message =
                    Some(err.user_message("No se pudieron filtrar las facturas."));
                Err(err)
            }
        }
    }

    /// Reset the fields and restore the unfiltered listing
    pub fn clear<S>(&mut self, view: &mut ListViewModel<S>)
    where
        S: CollectionSource<Filter = InvoiceFilter>,
    {
        *self = Self::default();
        view.clear_filter();
    }
}

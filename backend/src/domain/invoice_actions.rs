//! Invoice mutation service implementing the driving port.
//!
//! Each mutation is one short-lived unit of work: validate, issue a single
//! statement through the repository port, then invalidate the cached
//! listing and (for create/update) announce the redirect. Persistence
//! failures are recovered locally into the returned [`ActionState`]; the
//! caller is never left with an unhandled fault.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;
use uuid::Uuid;

use super::invoice::{InvoiceChanges, NewInvoice};
use super::invoice_form::{ActionState, FormFields, parse_invoice_fields};
use super::ports::{InvoiceMutations, InvoiceRepository, ListingCache, Navigator};

/// Logical path of the cached invoices listing view.
pub const INVOICES_LISTING_PATH: &str = "/dashboard/invoices";

/// Summary message when create-validation fails.
pub const CREATE_MISSING_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
/// Summary message when update-validation fails.
pub const UPDATE_MISSING_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Update Invoice.";
/// Summary message when the insert statement fails.
pub const CREATE_DB_ERROR_MESSAGE: &str = "Database Error: Failed to Create Invoice";
/// Summary message when the update statement fails.
pub const UPDATE_DB_ERROR_MESSAGE: &str = "Database Error: Failed to Update Invoice";
/// Summary message when the delete statement fails.
pub const DELETE_DB_ERROR_MESSAGE: &str = "Database Error: Failed to Delete Invoice";
/// Confirmation message returned after a successful delete.
pub const DELETE_CONFIRMATION_MESSAGE: &str = "Deleted Invoice.";

/// Invoice mutation service wired to its driven ports.
///
/// The clock supplies the creation date so tests can pin "today".
#[derive(Clone)]
pub struct InvoiceActions<R, C> {
    repository: Arc<R>,
    listing_cache: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<R, C> InvoiceActions<R, C> {
    /// Create a new service with the given ports.
    pub fn new(repository: Arc<R>, listing_cache: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            listing_cache,
            clock,
        }
    }
}

impl<R, C> InvoiceActions<R, C>
where
    R: InvoiceRepository,
    C: ListingCache,
{
    /// Invalidate the listing, then announce the redirect. Ordering matters:
    /// the destination view must be stale-marked before the client is sent
    /// there.
    fn finish_mutation(&self, navigator: &dyn Navigator) {
        self.listing_cache.invalidate(INVOICES_LISTING_PATH);
        navigator.redirect_to(INVOICES_LISTING_PATH);
    }
}

#[async_trait]
impl<R, C> InvoiceMutations for InvoiceActions<R, C>
where
    R: InvoiceRepository,
    C: ListingCache,
{
    async fn create_invoice(
        &self,
        _prev: ActionState,
        fields: &FormFields,
        navigator: &dyn Navigator,
    ) -> ActionState {
        let input = match parse_invoice_fields(fields) {
            Ok(input) => input,
            Err(errors) => {
                return ActionState::from_field_errors(errors, CREATE_MISSING_FIELDS_MESSAGE);
            }
        };

        let invoice = NewInvoice {
            customer_id: input.customer_id,
            amount_cents: input.amount_cents,
            status: input.status,
            date: self.clock.utc().date_naive(),
        };

        if let Err(error) = self.repository.insert(&invoice).await {
            warn!(%error, "invoice insert failed");
            return ActionState::with_message(CREATE_DB_ERROR_MESSAGE);
        }

        self.finish_mutation(navigator);
        ActionState::default()
    }

    async fn update_invoice(
        &self,
        id: Uuid,
        _prev: ActionState,
        fields: &FormFields,
        navigator: &dyn Navigator,
    ) -> ActionState {
        let input = match parse_invoice_fields(fields) {
            Ok(input) => input,
            Err(errors) => {
                return ActionState::from_field_errors(errors, UPDATE_MISSING_FIELDS_MESSAGE);
            }
        };

        let changes = InvoiceChanges {
            customer_id: input.customer_id,
            amount_cents: input.amount_cents,
            status: input.status,
        };

        if let Err(error) = self.repository.update(id, &changes).await {
            warn!(%error, invoice_id = %id, "invoice update failed");
            return ActionState::with_message(UPDATE_DB_ERROR_MESSAGE);
        }

        self.finish_mutation(navigator);
        ActionState::default()
    }

    async fn delete_invoice(&self, id: Uuid) -> ActionState {
        if let Err(error) = self.repository.delete(id).await {
            warn!(%error, invoice_id = %id, "invoice delete failed");
            return ActionState::with_message(DELETE_DB_ERROR_MESSAGE);
        }

        self.listing_cache.invalidate(INVOICES_LISTING_PATH);
        ActionState::with_message(DELETE_CONFIRMATION_MESSAGE)
    }
}

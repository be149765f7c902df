//! Driving port for invoice mutation use-cases.
//!
//! Inbound adapters call this to run one validated mutation per invocation
//! without knowing the backing infrastructure.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice_form::{ActionState, FormFields};

use super::Navigator;

/// Domain use-case port for the three invoice mutations.
///
/// Every method accepts the prior [`ActionState`]: the invocation protocol
/// threads the previous result through repeated submissions of the same
/// form, though the logic itself never reads it. Methods return a fresh
/// state rather than failing; persistence trouble is folded into the
/// state's summary message.
#[async_trait]
pub trait InvoiceMutations: Send + Sync {
    /// Validate and insert a new invoice, then invalidate and redirect.
    async fn create_invoice(
        &self,
        prev: ActionState,
        fields: &FormFields,
        navigator: &dyn Navigator,
    ) -> ActionState;

    /// Validate and update the invoice matching `id`, then invalidate and
    /// redirect. The identifier and creation date are never revalidated or
    /// changed.
    async fn update_invoice(
        &self,
        id: Uuid,
        prev: ActionState,
        fields: &FormFields,
        navigator: &dyn Navigator,
    ) -> ActionState;

    /// Delete the invoice matching `id` and invalidate the listing. No
    /// redirect: the delete action is invoked from the listing itself.
    async fn delete_invoice(&self, id: Uuid) -> ActionState;
}

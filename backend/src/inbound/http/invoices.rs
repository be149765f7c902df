//! Invoice form-action HTTP handlers.
//!
//! ```text
//! POST   /dashboard/invoices        create from urlencoded form fields
//! POST   /dashboard/invoices/{id}   update the matching invoice
//! DELETE /dashboard/invoices/{id}   delete the matching invoice
//! ```
//!
//! Mutations respond with `303 See Other` when the domain announced a
//! redirect, otherwise with the [`ActionState`] for the form to re-render.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, post, web};
use uuid::Uuid;

use crate::domain::{ActionState, Error, FormFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::navigator::RecordedRedirect;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn parse_invoice_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| {
        Error::invalid_request("invoice id must be a valid UUID")
            .with_details(serde_json::json!({ "field": "id", "value": raw }))
    })
}

/// Map a finished mutation to its HTTP shape.
///
/// A recorded redirect wins; otherwise field errors re-render as `422` and
/// anything else (including the database-error message) as `200`.
fn respond(state: ActionState, navigator: &RecordedRedirect) -> HttpResponse {
    if let Some(path) = navigator.take() {
        return HttpResponse::SeeOther()
            .insert_header((header::LOCATION, path))
            .finish();
    }
    if state.has_errors() {
        HttpResponse::UnprocessableEntity().json(state)
    } else {
        HttpResponse::Ok().json(state)
    }
}

/// Create an invoice from submitted form fields.
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    request_body(content = FormFields, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Invoice created; listing invalidated", headers(("Location" = String, description = "Invoices listing path"))),
        (status = 200, description = "Persistence failed; state carries the message", body = ActionState),
        (status = 422, description = "Validation failed; state carries field errors", body = ActionState),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice",
    security(("SessionCookie" = []))
)]
#[post("/dashboard/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    fields: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let navigator = RecordedRedirect::new();
    let outcome = state
        .invoices
        .create_invoice(ActionState::default(), &fields, &navigator)
        .await;
    Ok(respond(outcome, &navigator))
}

/// Update the invoice matching the path identifier.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}",
    request_body(content = FormFields, content_type = "application/x-www-form-urlencoded"),
    params(("id" = String, Path, description = "Invoice identifier")),
    responses(
        (status = 303, description = "Invoice updated; listing invalidated", headers(("Location" = String, description = "Invoices listing path"))),
        (status = 200, description = "Persistence failed; state carries the message", body = ActionState),
        (status = 422, description = "Validation failed; state carries field errors", body = ActionState),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice",
    security(("SessionCookie" = []))
)]
#[post("/dashboard/invoices/{id}")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    fields: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(&path)?;
    let navigator = RecordedRedirect::new();
    let outcome = state
        .invoices
        .update_invoice(id, ActionState::default(), &fields, &navigator)
        .await;
    Ok(respond(outcome, &navigator))
}

/// Delete the invoice matching the path identifier.
///
/// Invoked from within the listing view, so there is no redirect; the
/// response always carries the confirmation or failure message.
#[utoipa::path(
    delete,
    path = "/dashboard/invoices/{id}",
    params(("id" = String, Path, description = "Invoice identifier")),
    responses(
        (status = 200, description = "Outcome message", body = ActionState),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice",
    security(("SessionCookie" = []))
)]
#[delete("/dashboard/invoices/{id}")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(&path)?;
    let outcome = state.invoices.delete_invoice(id).await;
    Ok(HttpResponse::Ok().json(outcome))
}

//! Login API handler.
//!
//! ```text
//! POST /login {"email":"user@nextmail.com","password":"123456"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
///
/// Example JSON:
/// `{"email":"user@nextmail.com","password":"123456"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticate credentials and establish a session.
///
/// Every rejection, malformed input included, answers with the same
/// generic `401` so callers cannot probe which emails exist.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    match state.login.authorize(&request.email, &request.password).await? {
        Some(user) => {
            session.persist_user(user.id)?;
            Ok(HttpResponse::Ok().finish())
        }
        None => Err(Error::unauthorized("invalid credentials")),
    }
}

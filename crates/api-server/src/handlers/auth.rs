use super::ApiResult;
use crate::extract::{BearerToken, Json};
use crate::response::Envelope;
use crate::AppState;
use axum::extract::State;
use domain::{Account, AuthSession, LoginInput, RegisterInput};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Profile {
    customer: Account,
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> ApiResult<Envelope<AuthSession>> {
    let session = state.app.auth_service.register(input).await?;
    Ok(Envelope::created(session).with_message("Customer registered successfully"))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> ApiResult<Envelope<AuthSession>> {
    let session = state.app.auth_service.login(input).await?;
    Ok(Envelope::data(session).with_message("Login successful"))
}

pub async fn me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Envelope<Profile>> {
    let claims = state.app.auth_service.authenticate(&token)?;
    let customer = state.app.auth_service.profile(&claims).await?;
    Ok(Envelope::data(Profile { customer }))
}

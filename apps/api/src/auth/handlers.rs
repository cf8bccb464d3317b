use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::user::UserDto;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let token = state.auth.authenticate(&req.email, &req.password).await?;
    Ok(Json(json!({ "token": token })))
}

/// POST /api/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<UserDto>,
) -> Result<Json<Value>, AppError> {
    let token = state.auth.register(req).await?;
    Ok(Json(json!({
        "message": "User registered successfully",
        "token": token
    })))
}

//! Session handlers: registration, sign-in, sign-out.

use actix_web::{HttpResponse, web};

use blognest_core::AuthError;
use blognest_core::domain::{OAuthProvider, User};
use blognest_core::forms::RegistrationForm;
use blognest_shared::ApiResponse;
use blognest_shared::dto::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        provider: user.provider.to_string(),
    }
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let registration = RegistrationForm {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone_number: req.phone_number,
        bio: req.bio,
        password: req.password,
        confirm_password: req.confirm_password,
    }
    .validate()?;

    let user = state
        .session
        .register(&registration.name, &registration.email, &registration.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => AppError::BadRequest(REGISTRATION_FAILED.to_string()),
            other => other.into(),
        })?;

    tracing::debug!(request_id = %request_id.as_str(), user_id = %user.id, "Account registered");

    Ok(HttpResponse::Created().json(ApiResponse::ok(user_response(user))))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state.session.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(user))))
}

/// POST /api/auth/oauth/{provider}
pub async fn oauth(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let provider = path
        .into_inner()
        .parse::<OAuthProvider>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state.session.login_with(provider).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(user))))
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.session.logout().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        SessionResponse {
            user: None,
            is_loading: state.session.is_loading(),
        },
        "Signed out",
    )))
}

/// GET /api/auth/session
pub async fn session(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let user = state.session.current_user().await.map(user_response);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SessionResponse {
        user,
        is_loading: state.session.is_loading(),
    })))
}

use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use base64::{engine::general_purpose, Engine as _};

use crate::{
    db::{admindb::AdminExt, userdb::UserExt},
    error::{ErrorMessage, HttpError},
    models::usermodel::{Admin, BusinessUser, UserType, Worker},
    utils::token,
    AppState,
};

#[derive(Debug, Clone)]
pub enum Account {
    Business(BusinessUser),
    Worker(Worker),
}

#[derive(Debug, Clone)]
pub struct JWTAuthMiddeware {
    pub user_type: UserType,
    pub account: Account,
}

impl JWTAuthMiddeware {
    pub fn business(&self) -> Result<&BusinessUser, HttpError> {
        match &self.account {
            Account::Business(user) => Ok(user),
            Account::Worker(_) => {
                Err(HttpError::unauthorized(ErrorMessage::PermissionDenied.to_string()))
            }
        }
    }

    pub fn worker(&self) -> Result<&Worker, HttpError> {
        match &self.account {
            Account::Worker(worker) => Ok(worker),
            Account::Business(_) => {
                Err(HttpError::unauthorized(ErrorMessage::PermissionDenied.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminAuthMiddeware {
    pub admin: Admin,
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token_value = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    if auth_value.starts_with("Bearer ") {
                        Some(auth_value[7..].to_owned())
                    } else {
                        None
                    }
                })
        });

    let token_value = token_value
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::TokenNotProvided.to_string()))?;

    let claims = token::decode_token(token_value, app_state.env.jwt_secret.as_bytes())
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let user_id = uuid::Uuid::parse_str(&claims.sub)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let user_type = UserType::from_str(&claims.role)
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let account = match user_type {
        UserType::Business => {
            let user = app_state
                .db_client
                .get_business_user_by_id(user_id)
                .await
                .map_err(|_| {
                    HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string())
                })?
                .ok_or_else(|| {
                    HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string())
                })?;
            Account::Business(user)
        }
        UserType::Worker => {
            let worker = app_state
                .db_client
                .get_worker_by_id(user_id)
                .await
                .map_err(|_| {
                    HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string())
                })?
                .ok_or_else(|| {
                    HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string())
                })?;
            Account::Worker(worker)
        }
    };

    req.extensions_mut().insert(JWTAuthMiddeware { user_type, account });

    Ok(next.run(req).await)
}

/// Admin routes use HTTP Basic Auth (phone:password) validated against the
/// bcrypt hash stored on the admin row.
pub async fn admin_auth(
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string()))?;

    let (phone, password) = parse_basic_credentials(header_value)
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::InvalidCredentials.to_string()))?;

    let admin = app_state
        .db_client
        .get_admin_by_phone(&phone)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::InvalidCredentials.to_string()))?;

    if !admin.is_active.unwrap_or(false) {
        return Err(HttpError::unauthorized(
            ErrorMessage::AdminAccountDisabled.to_string(),
        ));
    }

    let password_matches = bcrypt::verify(&password, &admin.password)
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    if !password_matches {
        return Err(HttpError::unauthorized(
            ErrorMessage::InvalidCredentials.to_string(),
        ));
    }

    req.extensions_mut().insert(AdminAuthMiddeware { admin });

    Ok(next.run(req).await)
}

fn parse_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (phone, password) = decoded.split_once(':')?;
    if phone.is_empty() {
        return None;
    }
    Some((phone.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_basic(raw: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }

    #[test]
    fn parses_phone_and_password() {
        let header = encode_basic("+919876543210:hunter2");
        let (phone, password) = parse_basic_credentials(&header).unwrap();
        assert_eq!(phone, "+919876543210");
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn password_may_contain_colons() {
        let header = encode_basic("+91987:pass:word");
        let (phone, password) = parse_basic_credentials(&header).unwrap();
        assert_eq!(phone, "+91987");
        assert_eq!(password, "pass:word");
    }

    #[test]
    fn rejects_non_basic_schemes() {
        assert!(parse_basic_credentials("Bearer abc").is_none());
    }

    #[test]
    fn rejects_missing_separator() {
        let header = encode_basic("no-separator");
        assert!(parse_basic_credentials(&header).is_none());
    }

    #[test]
    fn rejects_empty_phone() {
        let header = encode_basic(":password");
        assert!(parse_basic_credentials(&header).is_none());
    }
}

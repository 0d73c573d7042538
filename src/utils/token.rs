// utils/token.rs
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::usermodel::UserType;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String, // "business" | "worker"
    pub iat: usize,
    pub exp: usize,
}

pub fn create_token(
    user_id: &Uuid,
    user_type: UserType,
    secret: &[u8],
    expires_in_seconds: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        role: user_type.to_str().to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::seconds(expires_in_seconds)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
}

pub fn decode_token(
    token: impl Into<String>,
    secret: &[u8],
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let decoded = decode::<TokenClaims>(
        &token.into(),
        &DecodingKey::from_secret(secret),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )?;
    Ok(decoded.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_user_and_role() {
        let user_id = Uuid::new_v4();
        let token = create_token(&user_id, UserType::Worker, b"secret", 60).unwrap();
        let claims = decode_token(token, b"secret").unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "worker");
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = create_token(&Uuid::new_v4(), UserType::Business, b"secret", 60).unwrap();
        assert!(decode_token(token, b"other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token(&Uuid::new_v4(), UserType::Business, b"secret", -120).unwrap();
        assert!(decode_token(token, b"secret").is_err());
    }
}

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "user_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Business,
    Worker,
}

impl UserType {
    pub fn to_str(&self) -> &str {
        match self {
            UserType::Business => "business",
            UserType::Worker => "worker",
        }
    }

    pub fn from_str(value: &str) -> Option<UserType> {
        match value {
            "business" => Some(UserType::Business),
            "worker" => Some(UserType::Worker),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct BusinessUser {
    pub id: Uuid,
    pub phone: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub location: Option<String>,
    pub role: String,
    pub is_verified: Option<bool>, // Database has DEFAULT FALSE, can be NULL
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Worker {
    pub id: Uuid,
    pub phone: String,
    pub name: String,
    pub services: Vec<String>, // category slugs the worker can take bookings for
    pub rating: Option<f64>,   // Database has DEFAULT 0.0, can be NULL
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "Base price must be positive"))]
    pub base_price: f64,

    #[validate(range(min = 0.0, message = "Service charge must be positive"))]
    pub service_charge: f64,

    #[validate(length(min = 1, max = 100, message = "Duration is required"))]
    pub duration: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub seo_keywords: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must not be empty"))]
    pub category: Option<String>,

    #[validate(range(min = 0.0, message = "Base price must be positive"))]
    pub base_price: Option<f64>,

    #[validate(range(min = 0.0, message = "Service charge must be positive"))]
    pub service_charge: Option<f64>,

    pub duration: Option<String>,
    pub tags: Option<Vec<String>>,
    pub seo_keywords: Option<Vec<String>>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceListQueryDto {
    pub category: Option<String>,
}

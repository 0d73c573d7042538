use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateBusinessProfileDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,

    #[validate(length(
        min = 1,
        max = 150,
        message = "Company name must be between 1-150 characters"
    ))]
    pub company_name: Option<String>,

    #[validate(length(min = 2, max = 255, message = "Location must be between 2-255 characters"))]
    pub location: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateWorkerProfileDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1-100 characters"))]
    pub name: Option<String>,

    /// Full replacement of the worker's category slug list.
    #[validate(length(min = 1, message = "At least one service is required"))]
    pub services: Option<Vec<String>>,
}

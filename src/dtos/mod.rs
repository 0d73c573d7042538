use serde::{Deserialize, Serialize};

pub mod admindtos;
pub mod bookingdtos;
pub mod paymentdtos;
pub mod servicedtos;
pub mod userdtos;
pub mod verificationdtos;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }
}

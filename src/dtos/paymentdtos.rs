use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpsertPaymentDetailsDto {
    #[validate(length(min = 3, max = 100, message = "UPI id must be between 3-100 characters"))]
    pub upi_id: Option<String>,

    #[validate(length(min = 10, max = 20, message = "Phone number must be between 10-20 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 6, max = 30, message = "Bank account must be between 6-30 characters"))]
    pub bank_account: Option<String>,

    #[validate(length(equal = 11, message = "IFSC code must be 11 characters"))]
    pub ifsc_code: Option<String>,
}

pub mod bookingmodel;
pub mod paymentmodel;
pub mod servicemodel;
pub mod usermodel;
pub mod verificationmodels;

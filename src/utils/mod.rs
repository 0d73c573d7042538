pub mod money;
pub mod otp_generator;
pub mod slug;
pub mod token;

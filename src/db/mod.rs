pub mod admindb;
pub mod bookingdb;
pub mod db;
pub mod paymentdb;
pub mod servicedb;
pub mod userdb;
pub mod verificationdb;

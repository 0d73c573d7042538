pub mod main_middleware;

pub use main_middleware::{admin_auth, auth, Account, AdminAuthMiddeware, JWTAuthMiddeware};

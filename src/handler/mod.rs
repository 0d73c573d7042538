pub mod admin;
pub mod auth;
pub mod booking;
pub mod business;
pub mod services;
pub mod worker;

pub mod admin;
pub mod login;
pub mod not_found;
pub mod register;
pub mod user;
pub mod worker;

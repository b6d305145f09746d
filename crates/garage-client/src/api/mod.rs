pub mod account;
pub mod auth;
pub mod orders;
pub mod wages;
pub mod workers;

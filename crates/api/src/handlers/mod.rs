pub mod auth;
pub mod catalog;
pub mod company;

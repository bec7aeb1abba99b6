pub mod catalog;
pub mod config;
pub mod contact;
pub mod errors;
pub mod models;
pub mod profile;
pub mod resume;
pub mod routes;
pub mod state;

pub mod config;
pub mod form;
pub mod models;
pub mod submit;
pub mod upload;

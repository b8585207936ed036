pub mod catalog;
pub mod clients;
pub mod dtos;
pub mod error;
pub mod models;
pub mod numeric;
pub mod rows;
pub mod submit;

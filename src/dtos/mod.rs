pub mod bill;
pub mod catalog;

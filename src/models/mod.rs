pub mod bill;
pub mod item;
pub mod row;

pub mod category;
pub mod product;
pub mod store;
pub mod user;

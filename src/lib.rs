pub mod bookstore;
pub mod core;
pub mod utils;

pub mod cast;
pub mod ddb;
pub mod logs;

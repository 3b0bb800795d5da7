pub mod add_bookstore_cmd;
pub mod get_bookstore_cmd;
pub mod list_bookstores_cmd;
pub mod remove_bookstore_cmd;
pub mod update_bookstore_cmd;

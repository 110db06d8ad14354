pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod parties;
pub mod shell;
pub mod utils;

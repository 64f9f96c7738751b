pub mod alert;
pub mod shell;
pub mod window;

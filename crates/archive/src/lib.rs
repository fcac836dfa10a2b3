pub mod archiver;
pub mod cli;
pub mod document;
pub mod error;
pub mod layout;
pub mod logging;

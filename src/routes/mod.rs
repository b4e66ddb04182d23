pub use contact::error_chain_fmt;

pub mod contact;
pub mod health_check;
pub mod home;

pub mod file;
pub mod instance;
pub mod shared;

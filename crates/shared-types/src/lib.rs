pub mod config;
pub mod error;

// Delivery dashboard domain
pub mod label;
pub mod navigation;
pub mod order;
pub mod profile;

pub use config::*;
pub use error::*;
pub use label::*;
pub use navigation::*;
pub use order::*;
pub use profile::*;

//! Data Models
//!
//! Configuration and wire types used by the application layer.

pub mod request;
pub mod response;
pub mod settings;

pub use request::*;
pub use response::*;
pub use settings::*;

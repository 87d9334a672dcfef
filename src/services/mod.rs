//! Services for talking to the outside world.
//!
//! # Services
//!
//! - [`extract`] - multipart upload to the extraction endpoint
//! - [`export`] - JSON/CSV encoders and the client-side download trigger

pub mod export;
pub mod extract;

pub use export::*;
pub use extract::*;

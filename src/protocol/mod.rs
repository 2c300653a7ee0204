//! JSON bodies exchanged with the API.

mod messages;

pub use messages::*;

//! HTTP gateway to the case API
//!
//! Exports the reqwest-backed client used by the board engine and the CLI.

pub mod client;
pub mod error;
pub mod normalize;


pub use client::BoardClient;
pub use error::{ClientError, ClientResult};

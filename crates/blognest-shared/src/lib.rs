//! # BlogNest Shared
//!
//! Wire types shared by the server and any client of its JSON API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

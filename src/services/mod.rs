//! External communication services.
//!
//! # Services
//!
//! - [`parse`] - PDF submission to the external parsing service

pub mod parse;

pub use parse::*;

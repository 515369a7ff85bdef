//! UI Components for the Driveline frontend.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with product badges
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF upload with drag & drop and submission
//! - [`ResultsSection`] - Categorized panels for the parsed record
//! - [`EmptyResults`] - Placeholder before the first parse

mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;

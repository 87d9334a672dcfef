//! UI components for the invoice extractor.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the configured API endpoint badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File upload, method selector and submit
//! - [`ResultsSection`] - Extracted field grid with export buttons

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

//! UI Components Module
//!
//! This module contains reusable UI components for the Fieldkit Linux app.

pub mod input_field;
pub mod spinner;

// Re-export components that are used by the views
pub use spinner::Spinner;

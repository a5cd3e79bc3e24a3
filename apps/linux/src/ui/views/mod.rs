//! UI Views Module
//!
//! Views represent complete screens of the Fieldkit Linux app.

pub mod showcase;

pub use showcase::{ShowcaseMessage, ShowcaseView};

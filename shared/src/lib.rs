//! Fieldkit Shared Library
//!
//! This crate contains the platform-agnostic part of the Fieldkit input
//! field: its configuration model, style resolution, render planning and
//! the component behaviours. Renderers (the iced desktop app, or a web host
//! consuming [`RenderPlan::to_html`]) build on top of it.
//!
//! # Features
//!
//! - **Data Models**: Field configuration, variants, sizes and change events
//! - **Styles**: Fixed variant/size/state tables resolved into class strings and native metrics
//! - **Render Plans**: Which slots a field shows for a configuration and state
//! - **Component**: Clear, input and password-visibility behaviours with external value control
//! - **Configuration**: YAML showcase configuration for the desktop app
//!
//! # Usage
//!
//! ```rust
//! use fieldkit_shared::{ChangeEvent, FieldConfig, InputField};
//!
//! let field = InputField::new(
//!     FieldConfig::password()
//!         .with_label("Password")
//!         .with_value("hunter2")
//!         .clear_button(true),
//! );
//!
//! let plan = field.render();
//! assert!(plan.clear_button.is_some());
//! assert!(plan.visibility_toggle.is_some());
//!
//! let mut value = String::from("hunter2");
//! field.clear(Some(&mut |event: ChangeEvent| value = event.value));
//! assert!(value.is_empty());
//! ```

pub mod config;
pub mod field;
pub mod markup;
pub mod models;
pub mod render;
pub mod style;

// Re-export commonly used types for convenience
pub use models::{ChangeEvent, ElementHandle, FieldConfig, InputKind, Size, Variant};

pub use field::{ChangeNotifier, FieldAction, FieldState, InputField};

pub use render::{ControlPlan, Footer, LabelPlan, RenderPlan, TrailingButton};

pub use style::{FieldStyle, SizeMetrics, SizeStyle, VariantStyle};

// Re-export config functionality
pub use config::{ConfigManager, FieldEntry, ShowcaseConfig, ThemePreference, UiConfig};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum SharedError {
        #[error("Validation error: {message}")]
        Validation { message: String },

        #[error("Configuration error: {message}")]
        Config { message: String },

        #[error("YAML error: {0}")]
        Yaml(#[from] serde_yaml::Error),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// Result type alias for shared library operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{SharedError, SharedResult};

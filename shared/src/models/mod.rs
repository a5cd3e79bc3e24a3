//! Shared data models for Fieldkit
//!
//! This module contains the configuration that a host passes to an input
//! field on every render, the enums that select its visual treatment, and
//! the payload emitted when the field reports a value change.

pub mod event;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use event::*;

/// Visual treatment of the field's background and border
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Tinted background, transparent border
    Filled,

    /// White background with a full grey border
    #[default]
    Outlined,

    /// Transparent background, bottom border only, square corners
    Ghost,
}

/// Field dimensions (text size, height and horizontal padding)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Size {
    #[serde(rename = "sm")]
    Small,

    #[default]
    #[serde(rename = "md")]
    Medium,

    #[serde(rename = "lg")]
    Large,
}

/// Declared kind of the underlying control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Plain text
    #[default]
    Text,

    /// Masked text, with a visibility toggle
    Password,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Filled, Variant::Outlined, Variant::Ghost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Ghost => "ghost",
        }
    }
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "sm",
            Size::Medium => "md",
            Size::Large => "lg",
        }
    }
}

impl InputKind {
    /// Value of the HTML `type` attribute for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, InputKind::Password)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display and behaviour flags for one input field
///
/// The configuration is immutable from the field's point of view: the host
/// builds a fresh one (or mutates its own copy) and hands it over on every
/// render. The `value` is owned by the host; the field only displays it and
/// reports change intents through a [`ChangeNotifier`](crate::field::ChangeNotifier).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FieldConfig {
    /// Current text value, owned by the host
    pub value: Option<String>,

    /// Text shown above the control
    pub label: Option<String>,

    /// Placeholder shown while the value is empty
    pub placeholder: Option<String>,

    /// Hint shown below the control while the field is valid
    pub helper_text: Option<String>,

    /// Message shown below the control while the field is invalid
    pub error_message: Option<String>,

    pub disabled: bool,
    pub invalid: bool,

    /// Whether an operation is in flight; shows a spinner and makes the control inert
    pub loading: bool,

    /// Whether the clear button may be offered
    pub show_clear_button: bool,

    pub variant: Variant,
    pub size: Size,

    #[serde(rename = "type")]
    pub kind: InputKind,

    /// Extra classes appended to the wrapper element
    pub class_name: Option<String>,
}

impl FieldConfig {
    /// Create a plain text field configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a password field configuration
    pub fn password() -> Self {
        Self {
            kind: InputKind::Password,
            ..Self::default()
        }
    }

    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_helper_text<S: Into<String>>(mut self, helper_text: S) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn with_error_message<S: Into<String>>(mut self, error_message: S) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_class_name<S: Into<String>>(mut self, class_name: S) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Current value, with an absent value read as empty
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Whether the control accepts input.
    ///
    /// Loading makes the control inert without applying the disabled look.
    pub fn is_interactive(&self) -> bool {
        !(self.disabled || self.loading)
    }

    /// Whether the trailing icon region needs reserved padding
    pub fn reserves_trailing_slot(&self) -> bool {
        self.kind.is_password() || self.show_clear_button || self.loading
    }
}

/// Non-empty text, or nothing
pub(crate) fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.variant, Variant::Outlined);
        assert_eq!(config.size, Size::Medium);
        assert_eq!(config.kind, InputKind::Text);
        assert!(!config.disabled);
        assert!(!config.invalid);
        assert!(!config.loading);
        assert!(!config.show_clear_button);
        assert_eq!(config.value_str(), "");
    }

    #[test]
    fn test_builder() {
        let config = FieldConfig::password()
            .with_label("Password")
            .with_value("secret")
            .variant(Variant::Ghost)
            .size(Size::Large)
            .clear_button(true);

        assert_eq!(config.kind, InputKind::Password);
        assert_eq!(config.label.as_deref(), Some("Password"));
        assert_eq!(config.value_str(), "secret");
        assert_eq!(config.variant, Variant::Ghost);
        assert_eq!(config.size, Size::Large);
        assert!(config.show_clear_button);
    }

    #[test]
    fn test_loading_is_inert_but_not_disabled() {
        let config = FieldConfig::new().loading(true);
        assert!(!config.is_interactive());
        assert!(!config.disabled);
    }

    #[test]
    fn test_trailing_slot_reservation() {
        assert!(!FieldConfig::new().reserves_trailing_slot());
        assert!(FieldConfig::password().reserves_trailing_slot());
        assert!(FieldConfig::new().clear_button(true).reserves_trailing_slot());
        assert!(FieldConfig::new().loading(true).reserves_trailing_slot());
    }

    #[test]
    fn test_yaml_names() {
        let yaml = r#"
label: Email
variant: ghost
size: sm
type: password
show_clear_button: true
"#;
        let config: FieldConfig = serde_yaml::from_str(yaml).expect("valid field yaml");
        assert_eq!(config.variant, Variant::Ghost);
        assert_eq!(config.size, Size::Small);
        assert_eq!(config.kind, InputKind::Password);
        assert!(config.show_clear_button);
        assert!(!config.disabled);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }
}

//! Showcase configuration for Fieldkit
//!
//! Describes the window the desktop app opens and the fields it shows. Every
//! structure uses `#[serde(default)]` so a partial YAML file fills in the
//! rest from the built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{SharedError, SharedResult};
use crate::models::{FieldConfig, Size, Variant};

/// Smallest and largest accepted font scale
pub const FONT_SCALE_RANGE: (f32, f32) = (0.5, 3.0);

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// User interface configuration
    pub ui: UiConfig,

    /// Fields shown by the showcase, in order
    pub fields: Vec<FieldEntry>,
}

/// User interface configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemePreference,

    /// Window width in logical pixels
    pub window_width: u32,

    /// Window height in logical pixels
    pub window_height: u32,

    /// Multiplier applied to every field's text size
    pub font_scale: f32,
}

/// Theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// One field of the showcase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FieldEntry {
    /// Unique name used in logs and messages
    pub name: String,

    /// Attach no change handler; the field displays its value but cannot change it
    pub read_only: bool,

    /// Display and behaviour flags; `value` is the value the host starts with
    #[serde(flatten)]
    pub config: FieldConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            window_width: 640,
            window_height: 900,
            font_scale: 1.0,
        }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            fields: default_fields(),
        }
    }
}

impl FieldEntry {
    pub fn new<S: Into<String>>(name: S, config: FieldConfig) -> Self {
        Self {
            name: name.into(),
            read_only: false,
            config,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl ShowcaseConfig {
    /// Check the configuration for problems serde cannot catch
    pub fn validate(&self) -> SharedResult<()> {
        let (min, max) = FONT_SCALE_RANGE;
        if !(min..=max).contains(&self.ui.font_scale) {
            return Err(SharedError::Validation {
                message: format!(
                    "font_scale must be between {min} and {max}, got {}",
                    self.ui.font_scale
                ),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.fields {
            if entry.name.trim().is_empty() {
                return Err(SharedError::Validation {
                    message: "field name cannot be empty".to_string(),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(SharedError::Validation {
                    message: format!("duplicate field name '{}'", entry.name),
                });
            }
        }

        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|entry| entry.name == name)
    }
}

/// The built-in showcase: one field per notable configuration
pub fn default_fields() -> Vec<FieldEntry> {
    vec![
        FieldEntry::new(
            "email",
            FieldConfig::new()
                .with_label("Email")
                .with_value("jane@example.com")
                .with_placeholder("you@example.com")
                .with_helper_text("We'll never share your email.")
                .clear_button(true),
        ),
        FieldEntry::new(
            "password",
            FieldConfig::password()
                .with_label("Password")
                .with_value("secret")
                .with_placeholder("Enter password...")
                .clear_button(true),
        ),
        FieldEntry::new(
            "username",
            FieldConfig::new()
                .with_label("Username")
                .with_value("admin")
                .with_error_message("That username is taken.")
                .with_helper_text("Letters and digits only.")
                .variant(Variant::Filled)
                .invalid(true),
        ),
        FieldEntry::new(
            "search",
            FieldConfig::new()
                .with_placeholder("Searching...")
                .variant(Variant::Ghost)
                .size(Size::Large)
                .loading(true),
        ),
        FieldEntry::new(
            "locked",
            FieldConfig::new()
                .with_label("Account id")
                .with_value("ACC-1042")
                .variant(Variant::Ghost)
                .size(Size::Small)
                .disabled(true),
        ),
        FieldEntry::new(
            "reference",
            FieldConfig::new()
                .with_label("Reference (read only)")
                .with_value("REF-77")
                .with_helper_text("Clearing asks the host, which has no handler here.")
                .clear_button(true),
        )
        .read_only(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_showcase_is_valid() {
        let config = ShowcaseConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.field("password").is_some());
        assert_eq!(
            config.field("password").map(|e| e.config.kind),
            Some(InputKind::Password)
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
ui:
  theme: dark
fields:
  - name: pin
    type: password
    label: PIN
    size: sm
"#;
        let config: ShowcaseConfig = serde_yaml::from_str(yaml).expect("valid showcase yaml");
        assert_eq!(config.ui.theme, ThemePreference::Dark);
        assert_eq!(config.ui.window_width, 640);
        assert_eq!(config.fields.len(), 1);

        let pin = &config.fields[0];
        assert_eq!(pin.name, "pin");
        assert!(!pin.read_only);
        assert_eq!(pin.config.kind, InputKind::Password);
        assert_eq!(pin.config.size, Size::Small);
        assert_eq!(pin.config.variant, Variant::Outlined);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = ShowcaseConfig {
            ui: UiConfig::default(),
            fields: vec![
                FieldEntry::new("a", FieldConfig::new()),
                FieldEntry::new("a", FieldConfig::password()),
            ],
        };
        assert_matches!(config.validate(), Err(SharedError::Validation { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = ShowcaseConfig {
            ui: UiConfig::default(),
            fields: vec![FieldEntry::new("  ", FieldConfig::new())],
        };
        assert_matches!(config.validate(), Err(SharedError::Validation { .. }));
    }

    #[test]
    fn test_font_scale_range() {
        let mut config = ShowcaseConfig::default();
        config.ui.font_scale = 10.0;
        assert_matches!(config.validate(), Err(SharedError::Validation { .. }));
    }
}

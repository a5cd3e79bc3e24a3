//! Render planning
//!
//! A [`RenderPlan`] is the framework-neutral description of what an input
//! field shows for one configuration and state: which slots are present,
//! their text, their classes and their accessibility attributes. Hosts turn
//! the plan into widgets (see the desktop app) or markup (see
//! [`crate::markup`]).

use crate::field::FieldState;
use crate::models::{non_empty, FieldConfig, InputKind};
use crate::style::{self, FieldStyle};

pub const CLEAR_LABEL: &str = "Clear input";
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// Label slot
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlan {
    pub text: String,
    /// Id of the control the label describes
    pub target: String,
    pub muted: bool,
    pub classes: String,
}

/// The input control itself
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPlan {
    pub id: String,
    /// Kind after applying password visibility
    pub kind: InputKind,
    /// Whether the value is shown masked
    pub masked: bool,
    pub value: String,
    pub placeholder: Option<String>,
    /// Inert to input (disabled or loading)
    pub disabled: bool,
    pub aria_invalid: bool,
    pub style: FieldStyle,
    pub classes: String,
}

/// An icon button in the trailing slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingButton {
    pub aria_label: &'static str,
    /// Buttons stay out of sequential keyboard navigation
    pub tab_index: i32,
}

/// Text below the control; helper and error share one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Helper(String),
    Error(String),
}

impl Footer {
    pub fn text(&self) -> &str {
        match self {
            Footer::Helper(text) | Footer::Error(text) => text,
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            Footer::Helper(_) => style::HELPER_TEXT_CLASSES,
            Footer::Error(_) => style::ERROR_TEXT_CLASSES,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Footer::Error(_))
    }
}

/// Everything an input field renders for one configuration and state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub wrapper_classes: String,
    pub label: Option<LabelPlan>,
    pub control: ControlPlan,
    pub spinner: bool,
    pub clear_button: Option<TrailingButton>,
    /// Visibility toggle; `visible` mirrors the current password visibility
    pub visibility_toggle: Option<(TrailingButton, bool)>,
    pub footer: Option<Footer>,
}

impl RenderPlan {
    pub fn build(config: &FieldConfig, state: &FieldState) -> Self {
        let style = FieldStyle::resolve(config);
        let kind = effective_kind(config.kind, state.is_password_visible());
        let id = state.input_id().as_str().to_string();

        let label = non_empty(&config.label).map(|text| LabelPlan {
            text: text.to_string(),
            target: id.clone(),
            muted: config.disabled,
            classes: style::label_classes(config),
        });

        let control = ControlPlan {
            id,
            kind,
            masked: kind.is_password(),
            value: config.value_str().to_string(),
            placeholder: config.placeholder.clone(),
            disabled: !config.is_interactive(),
            aria_invalid: config.invalid,
            classes: style.classes(),
            style,
        };

        let clear_button = shows_clear_button(config).then_some(TrailingButton {
            aria_label: CLEAR_LABEL,
            tab_index: -1,
        });

        let visibility_toggle = shows_visibility_toggle(config).then(|| {
            let visible = state.is_password_visible();
            let aria_label = if visible {
                HIDE_PASSWORD_LABEL
            } else {
                SHOW_PASSWORD_LABEL
            };
            (
                TrailingButton {
                    aria_label,
                    tab_index: -1,
                },
                visible,
            )
        });

        let plan = Self {
            wrapper_classes: style::wrapper_classes(config),
            label,
            control,
            spinner: config.loading,
            clear_button,
            visibility_toggle,
            footer: footer(config),
        };

        tracing::trace!(
            "Planned field '{}': spinner={}, clear={}, toggle={}, footer={:?}",
            plan.control.id,
            plan.spinner,
            plan.clear_button.is_some(),
            plan.visibility_toggle.is_some(),
            plan.footer.as_ref().map(Footer::is_error)
        );

        plan
    }

    pub fn helper_text(&self) -> Option<&str> {
        match &self.footer {
            Some(Footer::Helper(text)) => Some(text),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match &self.footer {
            Some(Footer::Error(text)) => Some(text),
            _ => None,
        }
    }
}

/// Kind actually presented: a visible password is shown as text
pub fn effective_kind(declared: InputKind, password_visible: bool) -> InputKind {
    match declared {
        InputKind::Password if password_visible => InputKind::Text,
        kind => kind,
    }
}

pub fn shows_clear_button(config: &FieldConfig) -> bool {
    !config.disabled && config.show_clear_button && !config.value_str().is_empty() && !config.loading
}

pub fn shows_visibility_toggle(config: &FieldConfig) -> bool {
    !config.disabled && config.kind.is_password() && !config.loading
}

/// Helper text while valid, error text while invalid
pub fn footer(config: &FieldConfig) -> Option<Footer> {
    if config.invalid {
        non_empty(&config.error_message).map(|text| Footer::Error(text.to_string()))
    } else {
        non_empty(&config.helper_text).map(|text| Footer::Helper(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn plan(config: &FieldConfig) -> RenderPlan {
        RenderPlan::build(config, &FieldState::new())
    }

    #[test]
    fn test_plain_field_has_no_decorations() {
        let p = plan(&FieldConfig::new());
        assert!(p.label.is_none());
        assert!(!p.spinner);
        assert!(p.clear_button.is_none());
        assert!(p.visibility_toggle.is_none());
        assert!(p.footer.is_none());
        assert_eq!(p.control.kind, InputKind::Text);
        assert!(!p.control.disabled);
    }

    #[test]
    fn test_label_targets_control() {
        let p = plan(&FieldConfig::new().with_label("Email"));
        let label = p.label.expect("label planned");
        assert_eq!(label.text, "Email");
        assert_eq!(label.target, p.control.id);
        assert!(!label.muted);
    }

    #[test]
    fn test_empty_label_is_skipped() {
        assert!(plan(&FieldConfig::new().with_label("")).label.is_none());
    }

    #[test]
    fn test_disabled_label_is_muted() {
        let p = plan(&FieldConfig::new().with_label("Name").disabled(true));
        assert_matches!(p.label, Some(LabelPlan { muted: true, .. }));
    }

    #[test]
    fn test_clear_button_needs_value() {
        let empty = plan(&FieldConfig::new().clear_button(true));
        assert!(empty.clear_button.is_none());

        let filled = plan(&FieldConfig::new().clear_button(true).with_value("hello"));
        let button = filled.clear_button.expect("clear button planned");
        assert_eq!(button.aria_label, CLEAR_LABEL);
        assert_eq!(button.tab_index, -1);
    }

    #[test]
    fn test_loading_replaces_trailing_buttons() {
        let p = plan(
            &FieldConfig::password()
                .with_value("secret")
                .clear_button(true)
                .loading(true),
        );
        assert!(p.spinner);
        assert!(p.clear_button.is_none());
        assert!(p.visibility_toggle.is_none());
        assert!(p.control.disabled);
        assert!(!p.control.classes.contains("opacity-60"));
    }

    #[test]
    fn test_password_with_value_shows_both_buttons() {
        let p = plan(&FieldConfig::password().with_value("secret").clear_button(true));
        assert!(p.clear_button.is_some());
        assert_matches!(
            p.visibility_toggle,
            Some((TrailingButton { aria_label: SHOW_PASSWORD_LABEL, tab_index: -1 }, false))
        );
        assert!(p.control.masked);
    }

    #[test]
    fn test_visible_password_renders_as_text() {
        let mut state = FieldState::new();
        state.toggle_password_visibility();
        let p = RenderPlan::build(&FieldConfig::password(), &state);
        assert_eq!(p.control.kind, InputKind::Text);
        assert!(!p.control.masked);
        assert_matches!(
            p.visibility_toggle,
            Some((TrailingButton { aria_label: HIDE_PASSWORD_LABEL, .. }, true))
        );
    }

    #[test]
    fn test_footer_follows_invalid_flag() {
        let both = FieldConfig::new()
            .with_helper_text("We never share it")
            .with_error_message("Required");

        let valid = plan(&both);
        assert_eq!(valid.helper_text(), Some("We never share it"));
        assert_eq!(valid.error_text(), None);

        let invalid = plan(&both.clone().invalid(true));
        assert_eq!(invalid.helper_text(), None);
        assert_eq!(invalid.error_text(), Some("Required"));
        assert!(invalid.control.aria_invalid);
    }

    #[test]
    fn test_invalid_without_error_text_shows_nothing() {
        let p = plan(&FieldConfig::new().with_helper_text("hint").invalid(true));
        assert!(p.footer.is_none());
    }

    #[test]
    fn test_effective_kind() {
        assert_eq!(effective_kind(InputKind::Text, true), InputKind::Text);
        assert_eq!(effective_kind(InputKind::Password, false), InputKind::Password);
        assert_eq!(effective_kind(InputKind::Password, true), InputKind::Text);
    }
}

//! Field Behaviour Integration Test
//!
//! Exercises the input field the way a host does: build a configuration,
//! render it, dispatch interactions, and apply the change notifications to
//! a value the host owns. Properties that must hold for every configuration
//! are checked with proptest.

use fieldkit_shared::models::{ChangeEvent, ElementHandle, FieldConfig, InputKind, Size, Variant};
use fieldkit_shared::{FieldAction, InputField, RenderPlan};
use proptest::prelude::*;

/// A host that owns the value and re-renders the field with it
struct ControlledHost {
    value: String,
    field: InputField,
    notifications: Vec<ChangeEvent>,
}

impl ControlledHost {
    fn new(config: FieldConfig) -> Self {
        let value = config.value_str().to_string();
        Self {
            value,
            field: InputField::new(config),
            notifications: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: FieldAction) {
        let mut received = Vec::new();
        self.field.update(
            action,
            Some(&mut |event: ChangeEvent| received.push(event)),
        );
        for event in received {
            self.value = event.value.clone();
            self.notifications.push(event);
        }
        self.field.set_value(self.value.clone());
    }

    fn plan(&self) -> RenderPlan {
        self.field.render()
    }
}

fn text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 <>&]{1,12}".prop_map(Some),
    ]
}

fn config() -> impl Strategy<Value = FieldConfig> {
    (
        (text(), text(), text(), text(), text()),
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        (
            prop::sample::select(Variant::ALL.to_vec()),
            prop::sample::select(Size::ALL.to_vec()),
            prop_oneof![Just(InputKind::Text), Just(InputKind::Password)],
        ),
    )
        .prop_map(
            |(
                (value, label, placeholder, helper_text, error_message),
                (disabled, invalid, loading, show_clear_button),
                (variant, size, kind),
            )| FieldConfig {
                value,
                label,
                placeholder,
                helper_text,
                error_message,
                disabled,
                invalid,
                loading,
                show_clear_button,
                variant,
                size,
                kind,
                class_name: None,
            },
        )
}

proptest! {
    #[test]
    fn invalid_fields_never_show_helper_text(config in config()) {
        let config = config.invalid(true);
        let plan = InputField::new(config.clone()).render();

        prop_assert_eq!(plan.helper_text(), None);
        match config.error_message.as_deref() {
            Some(error) if !error.is_empty() => prop_assert_eq!(plan.error_text(), Some(error)),
            _ => prop_assert!(plan.footer.is_none()),
        }
    }

    #[test]
    fn valid_fields_never_show_error_text(config in config()) {
        let config = config.invalid(false);
        let plan = InputField::new(config.clone()).render();

        prop_assert_eq!(plan.error_text(), None);
        match config.helper_text.as_deref() {
            Some(helper) if !helper.is_empty() => prop_assert_eq!(plan.helper_text(), Some(helper)),
            _ => prop_assert!(plan.footer.is_none()),
        }
    }

    #[test]
    fn disabled_fields_have_no_trailing_buttons(config in config()) {
        let plan = InputField::new(config.disabled(true)).render();

        prop_assert!(plan.clear_button.is_none());
        prop_assert!(plan.visibility_toggle.is_none());
        prop_assert!(plan.control.disabled);
        prop_assert!(!plan.control.classes.contains("focus:ring"));
    }

    #[test]
    fn loading_fields_show_only_the_spinner(config in config()) {
        let plan = InputField::new(config.loading(true)).render();

        prop_assert!(plan.spinner);
        prop_assert!(plan.clear_button.is_none());
        prop_assert!(plan.visibility_toggle.is_none());
        prop_assert!(plan.control.disabled);
    }

    #[test]
    fn loading_alone_never_dims(config in config()) {
        let plan = InputField::new(config.loading(true).disabled(false)).render();
        prop_assert!(!plan.control.classes.contains("cursor-not-allowed"));
    }

    #[test]
    fn class_string_is_normalised(config in config()) {
        let classes = InputField::new(config).render().control.classes;
        prop_assert!(!classes.contains("  "));
        prop_assert_eq!(classes.trim(), classes.as_str());
        prop_assert!(classes.starts_with("w-full rounded-lg"));
    }

    #[test]
    fn aria_invalid_mirrors_flag(config in config()) {
        let invalid = config.invalid;
        let plan = InputField::new(config).render();
        prop_assert_eq!(plan.control.aria_invalid, invalid);
    }

    #[test]
    fn double_toggle_restores_kind(config in config()) {
        let mut field = InputField::new(config);
        let before = field.effective_kind();
        field.toggle_password_visibility();
        field.toggle_password_visibility();
        prop_assert_eq!(field.effective_kind(), before);
    }
}

#[test]
fn test_clear_hello_notifies_once() {
    let mut host = ControlledHost::new(FieldConfig::new().with_value("hello").clear_button(true));
    assert!(host.plan().clear_button.is_some());

    host.dispatch(FieldAction::Clear);

    assert_eq!(host.notifications.len(), 1);
    assert_eq!(host.notifications[0].value, "");
    assert_eq!(host.value, "");
    assert!(host.plan().clear_button.is_none());
}

#[test]
fn test_clear_without_notifier() {
    let mut field = InputField::new(FieldConfig::new().with_value("hello").clear_button(true));
    field.update(FieldAction::Clear, None);
    assert_eq!(field.config().value_str(), "hello");
    assert!(field.render().clear_button.is_some());
}

#[test]
fn test_clear_reports_mounted_element() {
    let mut host = ControlledHost::new(FieldConfig::new().with_value("hello").clear_button(true));
    host.field.mount(ElementHandle::new("search-box"));

    host.dispatch(FieldAction::Clear);

    assert_eq!(
        host.notifications[0].source,
        Some(ElementHandle::new("search-box"))
    );
}

#[test]
fn test_typing_round_trips_through_host() {
    let mut host = ControlledHost::new(FieldConfig::new().clear_button(true));
    assert!(host.plan().clear_button.is_none());

    host.dispatch(FieldAction::Input("h".to_string()));
    host.dispatch(FieldAction::Input("hi".to_string()));

    assert_eq!(host.value, "hi");
    assert_eq!(host.plan().control.value, "hi");
    assert!(host.plan().clear_button.is_some());
}

#[test]
fn test_toggle_once_unmasks_password() {
    let mut host = ControlledHost::new(FieldConfig::password().with_value("secret"));
    assert_eq!(host.plan().control.kind, InputKind::Password);

    host.dispatch(FieldAction::TogglePasswordVisibility);

    assert_eq!(host.plan().control.kind, InputKind::Text);
    assert!(host.notifications.is_empty());
    assert_eq!(host.value, "secret");
}

#[test]
fn test_password_with_clear_shows_both_buttons() {
    let plan = InputField::new(
        FieldConfig::password()
            .with_value("secret")
            .clear_button(true)
            .loading(false)
            .disabled(false),
    )
    .render();

    assert!(plan.clear_button.is_some());
    assert!(plan.visibility_toggle.is_some());
}

#[test]
fn test_ghost_small_disabled_style() {
    let plan = InputField::new(
        FieldConfig::new()
            .variant(Variant::Ghost)
            .size(Size::Small)
            .disabled(true),
    )
    .render();
    let classes = plan.control.classes;

    assert!(classes.contains("border-b"));
    assert!(classes.contains("rounded-none"));
    assert!(classes.contains("text-sm h-8 px-2"));
    assert!(classes.contains("opacity-60 cursor-not-allowed"));
    assert!(!classes.contains("focus:ring"));
}

#[test]
fn test_remount_starts_masked_again() {
    let mut field = InputField::new(FieldConfig::password().with_value("secret"));
    field.toggle_password_visibility();
    assert_eq!(field.effective_kind(), InputKind::Text);

    field.unmount();

    assert_eq!(field.effective_kind(), InputKind::Password);
}

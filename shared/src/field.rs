//! The input field component
//!
//! [`InputField`] pairs the host's [`FieldConfig`] with the field's own
//! ephemeral [`FieldState`]. It never owns the value: typed input and the
//! clear action are forwarded to a [`ChangeNotifier`] supplied by the host,
//! which decides what the next configuration looks like.

use crate::models::{ChangeEvent, ElementHandle, FieldConfig, InputKind};
use crate::render::{self, RenderPlan};

/// Receiver of value change intents.
///
/// Implemented for every `FnMut(ChangeEvent)`, so hosts normally pass a
/// closure that writes into their own value store.
pub trait ChangeNotifier {
    fn notify(&mut self, event: ChangeEvent);
}

impl<F> ChangeNotifier for F
where
    F: FnMut(ChangeEvent),
{
    fn notify(&mut self, event: ChangeEvent) {
        self(event)
    }
}

/// User interactions an input field reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// Text typed into the control
    Input(String),
    /// The clear button was pressed
    Clear,
    /// The visibility toggle was pressed
    TogglePasswordVisibility,
}

/// Ephemeral state owned by one field instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    input_id: ElementHandle,
    password_visible: bool,
    element: Option<ElementHandle>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self {
            input_id: ElementHandle::unique(),
            password_visible: false,
            element: None,
        }
    }

    /// Id the label uses to reference the control
    pub fn input_id(&self) -> &ElementHandle {
        &self.input_id
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Handle of the mounted control, if any
    pub fn element(&self) -> Option<&ElementHandle> {
        self.element.as_ref()
    }

    pub fn attach(&mut self, element: ElementHandle) {
        self.element = Some(element);
    }

    pub fn detach(&mut self) -> Option<ElementHandle> {
        self.element.take()
    }
}

/// A configurable text/password input field
#[derive(Debug, Clone, Default)]
pub struct InputField {
    config: FieldConfig,
    state: FieldState,
}

impl InputField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            state: FieldState::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Replace the configuration for the next render; local state survives
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    /// Set the value the host owns, for the next render
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.config.value = Some(value.into());
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Record the rendered control. The handle is not owned by the field.
    pub fn mount(&mut self, element: ElementHandle) {
        tracing::debug!("Field '{}' mounted as '{}'", self.state.input_id, element);
        self.state.attach(element);
    }

    /// Tear the instance down; ephemeral state starts over on the next mount
    pub fn unmount(&mut self) {
        let element = self.state.detach();
        tracing::debug!("Field '{}' unmounted from {:?}", self.state.input_id, element);
        self.state = FieldState::new();
    }

    pub fn is_password_visible(&self) -> bool {
        self.state.is_password_visible()
    }

    /// Kind the control is presented as
    pub fn effective_kind(&self) -> InputKind {
        render::effective_kind(self.config.kind, self.state.is_password_visible())
    }

    /// Flip password visibility. Purely local; nothing is notified.
    pub fn toggle_password_visibility(&mut self) {
        self.state.toggle_password_visibility();
        tracing::debug!(
            "Field '{}' password visibility toggled to: {}",
            self.state.input_id,
            self.state.is_password_visible()
        );
    }

    /// Ask the host to empty the value.
    ///
    /// Returns whether a notification was emitted; without a notifier this
    /// is a no-op.
    pub fn clear(&self, on_change: Option<&mut dyn ChangeNotifier>) -> bool {
        let Some(notifier) = on_change else {
            tracing::debug!(
                "Clear requested for field '{}' without a change handler",
                self.state.input_id
            );
            return false;
        };

        tracing::debug!("Clearing field '{}'", self.state.input_id);
        notifier.notify(ChangeEvent::cleared(self.state.element.clone()));
        true
    }

    /// Forward typed text to the host
    pub fn input(&self, value: String, on_change: Option<&mut dyn ChangeNotifier>) -> bool {
        let Some(notifier) = on_change else {
            return false;
        };

        if self.config.kind.is_password() {
            tracing::debug!(
                "Field '{}' input changed ({} chars)",
                self.state.input_id,
                value.chars().count()
            );
        } else {
            tracing::debug!("Field '{}' input changed to: '{}'", self.state.input_id, value);
        }
        notifier.notify(ChangeEvent::new(value, self.state.element.clone()));
        true
    }

    /// Dispatch a user interaction
    pub fn update(&mut self, action: FieldAction, on_change: Option<&mut dyn ChangeNotifier>) {
        match action {
            FieldAction::Input(value) => {
                if self.config.is_interactive() {
                    self.input(value, on_change);
                }
            }
            FieldAction::Clear => {
                self.clear(on_change);
            }
            FieldAction::TogglePasswordVisibility => self.toggle_password_visibility(),
        }
    }

    /// Plan the current render
    pub fn render(&self) -> RenderPlan {
        RenderPlan::build(&self.config, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_notifies_once_with_empty_value() {
        let field = InputField::new(FieldConfig::new().with_value("hello"));
        let mut events = Vec::new();
        let mut record = |event: ChangeEvent| events.push(event);

        assert!(field.clear(Some(&mut record)));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, "");
        assert_eq!(events[0].source, None);
    }

    #[test]
    fn test_clear_without_notifier_is_noop() {
        let field = InputField::new(FieldConfig::new().with_value("hello"));
        assert!(!field.clear(None));
        assert_eq!(field.config().value_str(), "hello");
    }

    #[test]
    fn test_clear_carries_mounted_element() {
        let mut field = InputField::new(FieldConfig::new().with_value("hello"));
        field.mount(ElementHandle::new("email-input"));

        let mut seen = None;
        field.clear(Some(&mut |event: ChangeEvent| seen = event.source));
        assert_eq!(seen, Some(ElementHandle::new("email-input")));
    }

    #[test]
    fn test_field_never_stores_value() {
        let mut field = InputField::new(FieldConfig::new().with_value("hello"));
        let mut last = None;
        field.update(
            FieldAction::Input("hello!".to_string()),
            Some(&mut |event: ChangeEvent| last = Some(event.value)),
        );

        assert_eq!(last.as_deref(), Some("hello!"));
        assert_eq!(field.config().value_str(), "hello");
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut field = InputField::new(FieldConfig::new().loading(true));
        let mut count = 0;
        field.update(
            FieldAction::Input("x".to_string()),
            Some(&mut |_event: ChangeEvent| count += 1),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_toggle_twice_restores_kind() {
        let mut field = InputField::new(FieldConfig::password());
        assert_eq!(field.effective_kind(), InputKind::Password);

        field.update(FieldAction::TogglePasswordVisibility, None);
        assert_eq!(field.effective_kind(), InputKind::Text);

        field.update(FieldAction::TogglePasswordVisibility, None);
        assert_eq!(field.effective_kind(), InputKind::Password);
    }

    #[test]
    fn test_toggle_does_not_notify() {
        let mut field = InputField::new(FieldConfig::password().with_value("secret"));
        let mut count = 0;
        field.update(
            FieldAction::TogglePasswordVisibility,
            Some(&mut |_event: ChangeEvent| count += 1),
        );
        assert_eq!(count, 0);
        assert!(field.is_password_visible());
    }

    #[test]
    fn test_unmount_resets_state() {
        let mut field = InputField::new(FieldConfig::password());
        field.mount(ElementHandle::new("pw"));
        field.toggle_password_visibility();
        let old_id = field.state().input_id().clone();

        field.unmount();

        assert!(!field.is_password_visible());
        assert!(field.state().element().is_none());
        assert_ne!(field.state().input_id(), &old_id);
    }

    #[test]
    fn test_set_config_keeps_local_state() {
        let mut field = InputField::new(FieldConfig::password());
        field.toggle_password_visibility();
        field.set_config(FieldConfig::password().with_label("New"));
        assert!(field.is_password_visible());
        assert_eq!(field.render().label.map(|l| l.text).as_deref(), Some("New"));
    }
}

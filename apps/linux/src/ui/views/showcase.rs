//! Showcase view
//!
//! Lists the configured fields. The view is the host of every field: it owns
//! the values and hands each field a change handler that writes into them.
//! Fields marked read-only get no handler, so clearing or typing leaves their
//! value untouched.

use iced::{
    keyboard, time,
    widget::{column, scrollable, text},
    Element, Length, Subscription, Task,
};
use std::time::Duration;
use tracing::{debug, warn};

use fieldkit_shared::{ChangeEvent, FieldAction, FieldEntry, InputField};

use crate::ui::components::{input_field, spinner, Spinner};
use crate::ui::theme::{text_styles, utils};

/// Messages handled by the showcase view
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseMessage {
    /// An interaction with the field at an index
    Field(usize, FieldAction),
    /// Spinner animation tick
    Tick,
    FocusNext,
    FocusPrevious,
}

/// One field and the value the view holds for it
#[derive(Debug)]
struct ShowcaseField {
    name: String,
    read_only: bool,
    value: String,
    field: InputField,
}

impl ShowcaseField {
    fn new(entry: FieldEntry) -> Self {
        let value = entry.config.value_str().to_string();
        let mut field = InputField::new(entry.config);
        // Change events report the control they came from
        let element = field.state().input_id().clone();
        field.mount(element);

        Self {
            name: entry.name,
            read_only: entry.read_only,
            value,
            field,
        }
    }

    fn apply(&mut self, action: FieldAction) {
        if self.read_only {
            self.field.update(action, None);
            return;
        }

        let mut received: Option<ChangeEvent> = None;
        self.field
            .update(action, Some(&mut |event: ChangeEvent| received = Some(event)));

        if let Some(event) = received {
            if self.field.config().kind.is_password() {
                debug!(
                    "Field '{}' value changed ({} chars, cleared: {})",
                    self.name,
                    event.value.chars().count(),
                    event.is_clear()
                );
            } else {
                debug!(
                    "Field '{}' value changed to '{}' from {:?}",
                    self.name, event.value, event.source
                );
            }
            self.value = event.value;
            self.field.set_value(self.value.clone());
        }
    }
}

/// The showcase screen
#[derive(Debug)]
pub struct ShowcaseView {
    fields: Vec<ShowcaseField>,
    spinner: Spinner,
}

impl ShowcaseView {
    pub fn new(entries: Vec<FieldEntry>) -> Self {
        debug!("Creating showcase with {} field(s)", entries.len());
        Self {
            fields: entries.into_iter().map(ShowcaseField::new).collect(),
            spinner: Spinner::new(),
        }
    }

    fn any_loading(&self) -> bool {
        self.fields.iter().any(|f| f.field.config().loading)
    }

    pub fn update(&mut self, message: ShowcaseMessage) -> Task<ShowcaseMessage> {
        match message {
            ShowcaseMessage::Field(index, action) => {
                match self.fields.get_mut(index) {
                    Some(entry) => entry.apply(action),
                    None => warn!("Action for unknown field index {}", index),
                }
                Task::none()
            }
            ShowcaseMessage::Tick => {
                self.spinner.tick();
                Task::none()
            }
            ShowcaseMessage::FocusNext => iced::widget::focus_next(),
            ShowcaseMessage::FocusPrevious => iced::widget::focus_previous(),
        }
    }

    pub fn view(&self) -> Element<'_, ShowcaseMessage> {
        let mut content = column![
            text("Fieldkit").size(utils::typography::header_text_size()),
            text("Text and password fields in every variant, size and state")
                .size(utils::typography::normal_text_size())
                .style(text_styles::caption()),
        ]
        .spacing(utils::standard_spacing());

        for (index, entry) in self.fields.iter().enumerate() {
            let field = input_field::view(&entry.field, &self.spinner)
                .map(move |action| ShowcaseMessage::Field(index, action));
            content = content.push(field);

            #[cfg(feature = "debug-ui")]
            {
                content = content.push(
                    text(entry.field.render().control.classes)
                        .size(utils::typography::small_text_size())
                        .style(text_styles::caption()),
                );
            }
        }

        scrollable(
            content
                .padding(utils::main_content_padding())
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    pub fn subscription(&self) -> Subscription<ShowcaseMessage> {
        let keys = keyboard::on_key_press(handle_key);

        let spinner = if self.any_loading() {
            time::every(Duration::from_millis(spinner::TICK_MILLIS)).map(|_| ShowcaseMessage::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, spinner])
    }
}

/// Tab moves focus between controls; trailing buttons are skipped
fn handle_key(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<ShowcaseMessage> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Tab) => Some(if modifiers.shift() {
            ShowcaseMessage::FocusPrevious
        } else {
            ShowcaseMessage::FocusNext
        }),
        _ => None,
    }
}

//! Native rendering of the input field
//!
//! Turns the [`RenderPlan`] of an [`InputField`] into iced widgets. The view
//! emits [`FieldAction`]s; the host feeds them back through
//! [`InputField::update`] together with its change handler.

use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, column, container, row, svg, text, text_input, tooltip, Space},
    Alignment, Element, Length,
};

use fieldkit_shared::style::TRAILING_PADDING;
use fieldkit_shared::{FieldAction, InputField, RenderPlan};

use crate::ui::components::Spinner;
use crate::ui::theme::{
    self, button_styles, container_styles, svg_styles, text_input_styles, text_styles,
    utils::{self, typography},
};

/// Build the widgets for one field
pub fn view<'a>(field: &InputField, spinner: &Spinner) -> Element<'a, FieldAction> {
    let plan = field.render();
    let variant = field.config().variant;
    let style = plan.control.style;
    let metrics = style.size.metrics;
    let text_size = typography::scaled(metrics.text_size);
    let height = typography::scaled(metrics.height);

    let mut content: Vec<Element<'a, FieldAction>> = Vec::new();

    if let Some(label) = &plan.label {
        content.push(
            text(label.text.clone())
                .size(typography::normal_text_size())
                .style(text_styles::label(label.muted))
                .into(),
        );
    }

    let control = text_input(
        plan.control.placeholder.as_deref().unwrap_or_default(),
        &plan.control.value,
    )
    .id(text_input::Id::new(plan.control.id.clone()))
    .on_input_maybe((!plan.control.disabled).then_some(FieldAction::Input))
    .secure(plan.control.masked)
    .size(text_size)
    .padding(utils::control_padding(height, text_size, metrics.padding_x))
    .width(Length::Fill)
    .style(text_input_styles::field(variant, style));

    let mut control_row = row![control].align_y(Alignment::Center);
    if let Some(slot) = trailing_slot(&plan, spinner, height) {
        control_row = control_row.push(slot);
    }
    content.push(control_row.into());

    if style.variant.bottom_border_only() {
        content.push(
            container(Space::with_height(Length::Fixed(1.0)))
                .width(Length::Fill)
                .style(container_styles::ghost_underline(style))
                .into(),
        );
    }

    if let Some(footer) = &plan.footer {
        content.push(
            text(footer.text().to_string())
                .size(typography::small_text_size())
                .style(text_styles::footer(footer.is_error()))
                .into(),
        );
    }

    column(content)
        .spacing(utils::stack_gap())
        .width(Length::Fill)
        .into()
}

/// The region to the right of the control
///
/// Its width is reserved whenever the field may show a trailing element, so
/// the control does not jump when the clear button comes and goes.
fn trailing_slot<'a>(
    plan: &RenderPlan,
    spinner: &Spinner,
    height: f32,
) -> Option<Element<'a, FieldAction>> {
    let mut items: Vec<Element<'a, FieldAction>> = Vec::new();

    if plan.spinner {
        items.push(spinner.view(utils::icon_size()));
    }
    if let Some(clear) = &plan.clear_button {
        items.push(trailing_button(
            theme::clear_icon(),
            clear.aria_label,
            FieldAction::Clear,
        ));
    }
    if let Some((toggle, visible)) = &plan.visibility_toggle {
        let icon = if *visible {
            theme::eye_off_icon()
        } else {
            theme::eye_icon()
        };
        items.push(trailing_button(
            icon,
            toggle.aria_label,
            FieldAction::TogglePasswordVisibility,
        ));
    }

    if items.is_empty() && !plan.control.style.reserve_trailing {
        return None;
    }

    let slots = items.len().max(1) as f32;
    Some(
        container(row(items).align_y(Alignment::Center))
            .width(Length::Fixed(TRAILING_PADDING * slots))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .into(),
    )
}

fn trailing_button<'a>(
    icon: svg::Handle,
    label: &'static str,
    on_press: FieldAction,
) -> Element<'a, FieldAction> {
    let size = utils::icon_size();
    let icon_button = button(
        svg(icon)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(svg_styles::trailing_icon()),
    )
    .on_press(on_press)
    .padding(utils::trailing_button_padding())
    .style(button_styles::trailing_icon());

    tooltip(
        icon_button,
        text(label).size(typography::small_text_size()),
        tooltip::Position::Bottom,
    )
    .into()
}

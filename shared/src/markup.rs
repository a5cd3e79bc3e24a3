//! HTML rendering of a [`RenderPlan`]
//!
//! Produces the markup a web host would mount for the field, with the same
//! structure and classes the desktop renderer mirrors natively.

use std::fmt::Write;

use crate::render::{RenderPlan, TrailingButton};
use crate::style;

const SPINNER_SVG: &str = concat!(
    r#"<svg class="animate-spin h-5 w-5 text-blue-500" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">"#,
    r#"<circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>"#,
    r#"<path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>"#,
    "</svg>"
);

const CLEAR_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">"#,
    r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z" clip-rule="evenodd"/>"#,
    "</svg>"
);

const EYE_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"/>"#,
    "</svg>"
);

const EYE_OFF_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" d="M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7a9.97 9.97 0 011.563-2.665m1.129-1.129A8.995 8.995 0 0112 5c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.268 5.765M15 12a3 3 0 11-6 0 3 3 0 016 0zm-6 0a3 3 0 10-6 0 3 3 0 006 0z"/>"#,
    "</svg>"
);

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl RenderPlan {
    /// Serialise the plan as an HTML fragment
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing into a String cannot fail
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        write!(out, r#"<div class="{}">"#, escape(&self.wrapper_classes))?;

        if let Some(label) = &self.label {
            write!(
                out,
                r#"<label for="{}" class="{}">{}</label>"#,
                escape(&label.target),
                escape(&label.classes),
                escape(&label.text)
            )?;
        }

        write!(out, r#"<div class="{}">"#, style::CONTROL_ROW_CLASSES)?;

        let control = &self.control;
        write!(
            out,
            r#"<input id="{}" type="{}" value="{}""#,
            escape(&control.id),
            control.kind.as_str(),
            escape(&control.value)
        )?;
        if let Some(placeholder) = &control.placeholder {
            write!(out, r#" placeholder="{}""#, escape(placeholder))?;
        }
        if control.disabled {
            out.push_str(" disabled");
        }
        write!(
            out,
            r#" aria-invalid="{}" class="{}"/>"#,
            control.aria_invalid,
            escape(&control.classes)
        )?;

        if self.spinner {
            write!(
                out,
                r#"<div class="{}">{}</div>"#,
                style::SPINNER_SLOT_CLASSES,
                SPINNER_SVG
            )?;
        }

        if let Some(button) = &self.clear_button {
            write_button(out, button, CLEAR_SVG)?;
        }

        if let Some((button, visible)) = &self.visibility_toggle {
            let icon = if *visible { EYE_OFF_SVG } else { EYE_SVG };
            write_button(out, button, icon)?;
        }

        out.push_str("</div>");

        if let Some(footer) = &self.footer {
            write!(
                out,
                r#"<p class="{}">{}</p>"#,
                footer.classes(),
                escape(footer.text())
            )?;
        }

        out.push_str("</div>");
        Ok(())
    }
}

fn write_button(out: &mut String, button: &TrailingButton, icon: &str) -> std::fmt::Result {
    write!(
        out,
        r#"<button type="button" class="{}" aria-label="{}" tabindex="{}">{}</button>"#,
        style::TRAILING_BUTTON_CLASSES,
        button.aria_label,
        button.tab_index,
        icon
    )
}

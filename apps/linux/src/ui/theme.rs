//! Theme and styling for the Fieldkit Linux app
//!
//! Maps the resolved [`FieldStyle`] of a field onto iced style functions.
//! Colours follow the Tailwind palette the field's class tables name, so the
//! native rendering and the HTML rendering look alike. Every style function
//! checks the theme's background to pick the `dark:` counterpart.

use iced::{
    widget::{button, container, svg, text, text_input},
    Background, Border, Color, Shadow, Theme,
};

use fieldkit_shared::{FieldStyle, ThemePreference, Variant};

/// Embedded eye icon SVG, shown while the password is masked
pub const EYE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye.svg");

/// Embedded eye-off icon SVG, shown while the password is visible
pub const EYE_OFF_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-off.svg");

/// Embedded clear icon SVG (circled x)
pub const CLEAR_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/clear.svg");

/// Embedded spinner SVG, rotated while a field is loading
pub const SPINNER_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/spinner.svg");

// Icon helper functions
pub fn eye_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_ICON_SVG)
}

pub fn eye_off_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_OFF_ICON_SVG)
}

pub fn clear_icon() -> svg::Handle {
    svg::Handle::from_memory(CLEAR_ICON_SVG)
}

pub fn spinner_icon() -> svg::Handle {
    svg::Handle::from_memory(SPINNER_ICON_SVG)
}

// Tailwind palette
pub const WHITE: Color = Color::WHITE;

/// gray-50 (#f9fafb)
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

/// gray-100 (#f3f4f6)
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

/// gray-200 (#e5e7eb)
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);

/// gray-300 (#d1d5db)
pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);

/// gray-400 (#9ca3af)
pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);

/// gray-500 (#6b7280)
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);

/// gray-600 (#4b5563)
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);

/// gray-700 (#374151)
pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);

/// gray-800 (#1f2937)
pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);

/// gray-900 (#111827)
pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

/// blue-500 (#3b82f6), focus border and ring
pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);

/// blue-500 at low opacity for text selection
pub const BLUE_SELECTION: Color = Color::from_rgba(0.231, 0.510, 0.965, 0.35);

/// green-500 (#22c55e)
pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);

/// red-400 (#f87171)
pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);

/// red-500 (#ef4444), invalid border and error text
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);

pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// `opacity-60`
pub const DISABLED_OPACITY: f32 = 0.6;

/// `rounded-lg`
pub const CORNER_RADIUS: f32 = 8.0;

/// Width of the focus border; stands in for `ring-2`
pub const FOCUS_BORDER_WIDTH: f32 = 2.0;

/// Creates the Fieldkit theme for a preference
///
/// iced cannot query the desktop colour scheme, so `System` uses the light
/// palette.
pub fn create_fieldkit_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Dark => Theme::custom(
            "Fieldkit Dark".to_string(),
            iced::theme::Palette {
                background: GRAY_900,
                text: WHITE,
                primary: BLUE_500,
                success: GREEN_500,
                danger: RED_400,
            },
        ),
        ThemePreference::Light | ThemePreference::System => Theme::custom(
            "Fieldkit Light".to_string(),
            iced::theme::Palette {
                background: GRAY_50,
                text: GRAY_900,
                primary: BLUE_500,
                success: GREEN_500,
                danger: RED_500,
            },
        ),
    }
}

/// Whether the theme's background is dark
fn is_dark(theme: &Theme) -> bool {
    let background = theme.palette().background;
    let luminance = 0.2126 * background.r + 0.7152 * background.g + 0.0722 * background.b;
    luminance < 0.5
}

/// Pick the light or `dark:` colour
fn pick(theme: &Theme, light: Color, dark: Color) -> Color {
    if is_dark(theme) {
        dark
    } else {
        light
    }
}

/// Scale a colour's alpha, the native form of an `opacity-*` class
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Text input style functions
pub mod text_input_styles {
    use super::*;

    /// Style of a field's control for its variant and resolved flags
    pub fn field(
        variant: Variant,
        style: FieldStyle,
    ) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        move |theme, status| {
            let focused = matches!(status, text_input::Status::Focused) && style.focus_ring();

            let mut background = match variant {
                Variant::Filled => pick(theme, GRAY_100, GRAY_700),
                Variant::Outlined => pick(theme, WHITE, GRAY_800),
                Variant::Ghost => TRANSPARENT,
            };
            let mut border_color = match variant {
                Variant::Filled => TRANSPARENT,
                Variant::Outlined | Variant::Ghost => pick(theme, GRAY_300, GRAY_600),
            };
            let mut value = pick(theme, GRAY_900, WHITE);
            let mut placeholder = pick(theme, GRAY_400, GRAY_500);

            if focused {
                border_color = BLUE_500;
            }
            if style.invalid {
                border_color = RED_500;
            }
            if style.disabled {
                background = pick(theme, GRAY_200, GRAY_600);
                if is_dark(theme) {
                    value = GRAY_400;
                }
                background = fade(background, DISABLED_OPACITY);
                border_color = fade(border_color, DISABLED_OPACITY);
                value = fade(value, DISABLED_OPACITY);
                placeholder = fade(placeholder, DISABLED_OPACITY);
            }

            // Ghost draws its bottom edge as a separate rule
            let (width, radius) = if style.variant.bottom_border_only() {
                (0.0, 0.0)
            } else if focused {
                (FOCUS_BORDER_WIDTH, CORNER_RADIUS)
            } else {
                (1.0, CORNER_RADIUS)
            };

            text_input::Style {
                background: Background::Color(background),
                border: Border {
                    color: border_color,
                    width,
                    radius: radius.into(),
                },
                icon: GRAY_500,
                placeholder,
                value,
                selection: BLUE_SELECTION,
            }
        }
    }
}

/// Button style functions
pub mod button_styles {
    use super::*;

    /// Borderless icon button for the trailing slot; the icon carries the colour
    pub fn trailing_icon() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, _status| button::Style {
            background: None,
            text_color: GRAY_500,
            border: Border::default(),
            shadow: Shadow::default(),
        }
    }
}

/// SVG style functions
pub mod svg_styles {
    use super::*;

    /// `text-gray-500 hover:text-gray-700`, with the dark counterparts
    pub fn trailing_icon() -> impl Fn(&Theme, svg::Status) -> svg::Style {
        |theme, status| {
            let color = match status {
                svg::Status::Hovered => pick(theme, GRAY_700, GRAY_200),
                svg::Status::Idle => pick(theme, GRAY_500, GRAY_400),
            };
            svg::Style { color: Some(color) }
        }
    }

    /// `text-blue-500`
    pub fn spinner() -> impl Fn(&Theme, svg::Status) -> svg::Style {
        |_theme, _status| svg::Style {
            color: Some(BLUE_500),
        }
    }
}

/// Text style functions
pub mod text_styles {
    use super::*;

    /// Label above the control; muted while the field is disabled
    pub fn label(muted: bool) -> impl Fn(&Theme) -> text::Style {
        move |theme| {
            let color = pick(theme, GRAY_700, GRAY_200);
            text::Style {
                color: Some(if muted {
                    fade(color, DISABLED_OPACITY)
                } else {
                    color
                }),
            }
        }
    }

    /// Helper text, or the error message when `is_error`
    pub fn footer(is_error: bool) -> impl Fn(&Theme) -> text::Style {
        move |theme| {
            let color = if is_error {
                pick(theme, RED_500, RED_400)
            } else {
                pick(theme, GRAY_500, GRAY_400)
            };
            text::Style { color: Some(color) }
        }
    }

    /// Secondary text used by the showcase chrome
    pub fn caption() -> impl Fn(&Theme) -> text::Style {
        |theme| text::Style {
            color: Some(pick(theme, GRAY_500, GRAY_400)),
        }
    }
}

/// Container style functions
pub mod container_styles {
    use super::*;

    /// The bottom edge of a ghost field
    ///
    /// iced keeps focus inside the text input's widget state and does not
    /// expose it to siblings, so the underline has no focus colour. Only the
    /// invalid and disabled treatments apply.
    pub fn ghost_underline(style: FieldStyle) -> impl Fn(&Theme) -> container::Style {
        move |theme| {
            let mut color = if style.invalid {
                RED_500
            } else {
                pick(theme, GRAY_300, GRAY_600)
            };
            if style.disabled {
                color = fade(color, DISABLED_OPACITY);
            }
            container::Style {
                background: Some(Background::Color(color)),
                ..Default::default()
            }
        }
    }
}

/// Layout and sizing helpers
pub mod utils {
    use iced::Padding;

    /// Spacing between the fields of a view
    pub fn standard_spacing() -> u16 {
        16
    }

    /// `mt-1` / `mb-1`
    pub fn stack_gap() -> u16 {
        4
    }

    pub fn main_content_padding() -> Padding {
        Padding::from([24, 32])
    }

    /// Side length of a trailing icon (`h-5 w-5`)
    pub fn icon_size() -> f32 {
        20.0
    }

    /// Padding inside a trailing icon button
    pub fn trailing_button_padding() -> Padding {
        Padding::new(4.0)
    }

    /// Inner padding of a control given its height, text size and horizontal padding
    ///
    /// iced sizes a text input from its text and padding, so the vertical
    /// padding is derived from the height the size table asks for.
    pub fn control_padding(height: f32, text_size: f32, padding_x: f32) -> Padding {
        let line = text_size * typography::LINE_HEIGHT;
        let vertical = ((height - line) / 2.0).max(0.0);
        Padding {
            top: vertical,
            right: padding_x,
            bottom: vertical,
            left: padding_x,
        }
    }

    /// Typography utilities for consistent font sizing
    pub mod typography {
        use std::sync::OnceLock;

        /// iced's default relative line height
        pub const LINE_HEIGHT: f32 = 1.3;

        static FONT_SCALE: OnceLock<f32> = OnceLock::new();

        /// Set the scale applied to every text size; only the first call counts
        pub fn init_font_scale(scale: f32) {
            let _ = FONT_SCALE.set(scale);
        }

        pub fn font_scale() -> f32 {
            FONT_SCALE.get().copied().unwrap_or(1.0)
        }

        pub fn scaled(size: f32) -> f32 {
            size * font_scale()
        }

        /// `text-xs`
        pub fn small_text_size() -> f32 {
            scaled(12.0)
        }

        /// Label text
        pub fn normal_text_size() -> f32 {
            scaled(14.0)
        }

        pub fn header_text_size() -> f32 {
            scaled(24.0)
        }
    }
}

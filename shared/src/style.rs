//! Style resolution for input fields
//!
//! Styles are expressed as utility class fragments (the form a web host
//! consumes directly) together with the native metrics a desktop renderer
//! needs. Each table is a fixed mapping from a configuration enum to a
//! descriptor; [`FieldStyle::resolve`] combines them for one configuration.
//!
//! Fragment order is base, variant, size, disabled, invalid, trailing
//! padding. Later fragments win where properties overlap.

use crate::models::{FieldConfig, Size, Variant};

/// Classes every control carries
pub const BASE_CLASSES: &str = "w-full rounded-lg outline-none focus:outline-none \
                                transition-all duration-200 ease-in-out dark:text-white";

/// Focus treatment shared by all variants
pub const FOCUS_CLASSES: &str = "focus:border-blue-500 focus:ring-blue-500 focus:ring-2";

/// Overlay applied when the disabled flag is set
pub const DISABLED_CLASSES: &str =
    "opacity-60 cursor-not-allowed bg-gray-200 dark:bg-gray-600 dark:text-gray-400";

pub const INVALID_BORDER_CLASSES: &str = "border-red-500";
pub const INVALID_FOCUS_CLASSES: &str = "focus:border-red-500 focus:ring-red-500";

/// Right padding reserved for the trailing icon region
pub const TRAILING_PADDING_CLASS: &str = "pr-10";
pub const TRAILING_PADDING: f32 = 40.0;

pub const WRAPPER_CLASSES: &str = "relative flex flex-col mb-4";
pub const LABEL_CLASSES: &str = "mb-1 text-gray-700 dark:text-gray-200";
pub const LABEL_MUTED_CLASS: &str = "opacity-60";
pub const CONTROL_ROW_CLASSES: &str = "relative flex items-center w-full";
pub const SPINNER_SLOT_CLASSES: &str = "absolute right-3";
pub const SPINNER_CLASSES: &str = "animate-spin h-5 w-5 text-blue-500";
pub const TRAILING_BUTTON_CLASSES: &str = "absolute right-3 text-gray-500 hover:text-gray-700 \
                                           dark:text-gray-400 dark:hover:text-gray-200 \
                                           focus:outline-none";
pub const HELPER_TEXT_CLASSES: &str = "mt-1 text-xs text-gray-500 dark:text-gray-400";
pub const ERROR_TEXT_CLASSES: &str = "mt-1 text-xs text-red-500 dark:text-red-400";

/// Background, border and focus treatment of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    pub background: &'static str,
    pub border: &'static str,
    /// Corner override, if the variant is not rounded
    pub corners: Option<&'static str>,
    pub focus: &'static str,
    pub extra: Option<&'static str>,
}

impl VariantStyle {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Filled => Self {
                background: "bg-gray-100 dark:bg-gray-700",
                border: "border border-transparent",
                corners: None,
                focus: FOCUS_CLASSES,
                extra: None,
            },
            Variant::Outlined => Self {
                background: "bg-white dark:bg-gray-800",
                border: "border border-gray-300 dark:border-gray-600",
                corners: None,
                focus: FOCUS_CLASSES,
                extra: None,
            },
            Variant::Ghost => Self {
                background: "bg-transparent",
                border: "border-b border-gray-300 dark:border-gray-600",
                corners: Some("rounded-none"),
                focus: FOCUS_CLASSES,
                extra: Some("pb-1"),
            },
        }
    }

    /// Whether the border wraps the whole control or only its bottom edge
    pub fn bottom_border_only(&self) -> bool {
        self.border.starts_with("border-b")
    }
}

/// Native dimensions of a size, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub text_size: f32,
    pub height: f32,
    pub padding_x: f32,
}

/// Classes and metrics of a size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStyle {
    pub classes: &'static str,
    pub metrics: SizeMetrics,
}

impl SizeStyle {
    pub fn for_size(size: Size) -> Self {
        match size {
            Size::Small => Self {
                classes: "text-sm h-8 px-2",
                metrics: SizeMetrics {
                    text_size: 14.0,
                    height: 32.0,
                    padding_x: 8.0,
                },
            },
            Size::Medium => Self {
                classes: "text-base h-10 px-3",
                metrics: SizeMetrics {
                    text_size: 16.0,
                    height: 40.0,
                    padding_x: 12.0,
                },
            },
            Size::Large => Self {
                classes: "text-lg h-12 px-4",
                metrics: SizeMetrics {
                    text_size: 18.0,
                    height: 48.0,
                    padding_x: 16.0,
                },
            },
        }
    }
}

/// Resolved style of one control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub variant: VariantStyle,
    pub size: SizeStyle,
    pub disabled: bool,
    pub invalid: bool,
    pub reserve_trailing: bool,
}

impl FieldStyle {
    pub fn resolve(config: &FieldConfig) -> Self {
        Self {
            variant: VariantStyle::for_variant(config.variant),
            size: SizeStyle::for_size(config.size),
            disabled: config.disabled,
            invalid: config.invalid,
            reserve_trailing: config.reserves_trailing_slot(),
        }
    }

    /// Focus treatment is dropped while disabled; the control cannot take focus.
    pub fn focus_ring(&self) -> bool {
        !self.disabled
    }

    /// The whitespace-normalised class string
    pub fn classes(&self) -> String {
        let mut fragments: Vec<&str> = vec![
            BASE_CLASSES,
            self.variant.background,
            self.variant.border,
        ];
        fragments.extend(self.variant.corners);
        if self.focus_ring() {
            fragments.push(self.variant.focus);
        }
        fragments.extend(self.variant.extra);

        fragments.push(self.size.classes);

        if self.disabled {
            fragments.push(DISABLED_CLASSES);
        }
        if self.invalid {
            fragments.push(INVALID_BORDER_CLASSES);
            if self.focus_ring() {
                fragments.push(INVALID_FOCUS_CLASSES);
            }
        }
        if self.reserve_trailing {
            fragments.push(TRAILING_PADDING_CLASS);
        }

        join_classes(fragments)
    }
}

/// Resolve the class string for a configuration
pub fn input_classes(config: &FieldConfig) -> String {
    FieldStyle::resolve(config).classes()
}

/// Classes of the wrapper element, with the host's extra class appended
pub fn wrapper_classes(config: &FieldConfig) -> String {
    join_classes([WRAPPER_CLASSES, config.class_name.as_deref().unwrap_or("")])
}

pub fn label_classes(config: &FieldConfig) -> String {
    let muted = if config.disabled { LABEL_MUTED_CLASS } else { "" };
    join_classes([LABEL_CLASSES, muted])
}

/// Concatenate fragments, collapsing runs of whitespace to single spaces
pub fn join_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

//! UI Module for the Fieldkit Linux App
//!
//! This module contains the theme, the native input field component and the
//! showcase view that hosts it.

pub mod components;
pub mod theme;
pub mod views;

pub use theme::{create_fieldkit_theme, utils};

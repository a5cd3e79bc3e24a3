//! Loading spinner
//!
//! The spinner is a static SVG rotated by a phase the host advances on every
//! animation tick.

use iced::{widget::svg, Element, Length, Radians};
use std::f32::consts::TAU;

use crate::ui::theme::{self, svg_styles};

/// Interval between animation ticks, in milliseconds
pub const TICK_MILLIS: u64 = 16;

/// Seconds for one full turn (`animate-spin`)
const TURN_SECONDS: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner {
    angle: f32,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick, wrapping at a full turn
    pub fn tick(&mut self) {
        let step = TAU * (TICK_MILLIS as f32 / 1000.0) / TURN_SECONDS;
        self.angle = (self.angle + step) % TAU;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn view<'a, Message: 'a>(&self, size: f32) -> Element<'a, Message> {
        svg(theme::spinner_icon())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .rotation(Radians(self.angle()))
            .style(svg_styles::spinner())
            .into()
    }
}

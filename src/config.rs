//! Startup constants and the viewport-derived layout.

use std::f64::consts::TAU;

use crate::curve::Interval;
use crate::error::{WormError, WormResult};

/// Everything the animation is built from. There is no external source for
/// these values; `Default` is the configuration the page runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct WormConfig {
    /// Element id of the canvas to draw on.
    pub canvas_id: String,
    /// Number of points in the sliding window.
    pub capacity: usize,
    /// Milliseconds between two `advance()` ticks.
    pub tick_interval_ms: u32,
    /// Range the parameter wraps within.
    pub interval: Interval,
    /// Span of parameter covered by the visible worm.
    pub domain_size: f64,
    /// Padding is `max(width, height) / padding_divisor`.
    pub padding_divisor: f64,
}

impl Default for WormConfig {
    fn default() -> Self {
        Self {
            canvas_id: "animate".to_string(),
            capacity: 100,
            tick_interval_ms: 10,
            interval: Interval::new(0.0, TAU),
            domain_size: 1.0,
            padding_divisor: 20.0,
        }
    }
}

impl WormConfig {
    /// Parameter increment per point.
    pub fn step(&self) -> f64 {
        self.domain_size / self.capacity as f64
    }

    pub fn validate(&self) -> WormResult<()> {
        if self.capacity == 0 {
            return Err(WormError::ZeroCapacity);
        }
        self.interval.validate()?;
        let step = self.step();
        if !step.is_finite() || step <= 0.0 {
            return Err(WormError::InvalidStep(step));
        }
        if self.tick_interval_ms == 0 {
            return Err(WormError::ZeroTickInterval);
        }
        if i32::try_from(self.tick_interval_ms).is_err() {
            return Err(WormError::TickIntervalTooLong(self.tick_interval_ms));
        }
        if !self.padding_divisor.is_finite() || self.padding_divisor <= 0.0 {
            return Err(WormError::InvalidPadding(self.padding_divisor));
        }
        Ok(())
    }
}

/// Canvas size and curve scale for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub coefficient_x: f64,
    pub coefficient_y: f64,
}

impl Layout {
    pub fn from_viewport(config: &WormConfig, width: f64, height: f64) -> Self {
        let padding = width.max(height) / config.padding_divisor;
        Self {
            width,
            height,
            padding,
            // keep the round caps inside the canvas
            coefficient_x: ((width - padding - 1.0) / 2.0).max(0.0),
            coefficient_y: ((height - padding - 1.0) / 2.0).max(0.0),
        }
    }

    /// The stroke is as thick as the margin it leaves.
    pub fn line_width(&self) -> f64 {
        self.padding
    }
}

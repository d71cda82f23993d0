//! Parametric curve sampled into a fixed-size sliding window.
//!
//! The window is pre-filled on construction and every [`Curve::advance`]
//! drops the oldest point and appends one computed at the current
//! parameter, so a reader always sees exactly `capacity` points.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{WormError, WormResult};

/// A point in centered coordinates: origin at the canvas center, y up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Half-open parameter range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn validate(&self) -> WormResult<()> {
        if self.min.is_finite() && self.max.is_finite() && self.max > self.min {
            Ok(())
        } else {
            Err(WormError::InvalidInterval {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Folds `t` into `[min, max)`.
    pub fn wrap(&self, t: f64) -> f64 {
        let wrapped = (t - self.min).rem_euclid(self.width()) + self.min;
        // rem_euclid can round up to exactly the width for tiny negative inputs
        if wrapped >= self.max {
            self.min
        } else {
            wrapped
        }
    }
}

/// One coordinate of the curve as a function of the parameter.
pub type Periodic = Box<dyn Fn(f64) -> f64>;

pub struct Curve {
    fx: Periodic,
    fy: Periodic,
    interval: Interval,
    coefficient_x: f64,
    coefficient_y: f64,
    parameter: f64,
    step: f64,
    capacity: usize,
    points: VecDeque<Point>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("interval", &self.interval)
            .field("coefficient_x", &self.coefficient_x)
            .field("coefficient_y", &self.coefficient_y)
            .field("parameter", &self.parameter)
            .field("step", &self.step)
            .field("capacity", &self.capacity)
            .field("points", &self.points.len())
            .finish()
    }
}

impl Curve {
    /// Builds a curve and fills its window. The parameter starts at
    /// `interval.min` and is bumped by `step` after each of the `capacity`
    /// initial points without wrapping.
    pub fn new<X, Y>(
        fx: X,
        fy: Y,
        interval: Interval,
        capacity: usize,
        step: f64,
        coefficients: (f64, f64),
    ) -> WormResult<Self>
    where
        X: Fn(f64) -> f64 + 'static,
        Y: Fn(f64) -> f64 + 'static,
    {
        if capacity == 0 {
            return Err(WormError::ZeroCapacity);
        }
        interval.validate()?;
        if !step.is_finite() || step <= 0.0 {
            return Err(WormError::InvalidStep(step));
        }

        let mut curve = Self {
            fx: Box::new(fx),
            fy: Box::new(fy),
            interval,
            coefficient_x: coefficients.0,
            coefficient_y: coefficients.1,
            parameter: interval.min,
            step,
            capacity,
            points: VecDeque::with_capacity(capacity),
        };
        while curve.points.len() < capacity {
            let point = curve.sample();
            curve.points.push_back(point);
            curve.parameter += step;
        }
        Ok(curve)
    }

    fn sample(&self) -> Point {
        Point::new(
            (self.fx)(self.parameter) * self.coefficient_x,
            (self.fy)(self.parameter) * self.coefficient_y,
        )
    }

    /// Slides the window forward by one point and wraps the parameter.
    pub fn advance(&mut self) {
        let point = self.sample();
        self.points.push_back(point);
        self.points.pop_front();
        self.parameter = self.interval.wrap(self.parameter + self.step);
    }

    /// Oldest point first.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point> + Clone + '_ {
        self.points.iter()
    }

    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

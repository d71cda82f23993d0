//! Rainbow color for a parameter value.
//!
//! The interval is cut into six equal [`Segment`]s. In each one a single
//! channel is held at 255, one sits at 0 and the third ramps linearly, so the
//! hue walks cyan, blue, magenta, red, yellow, green and back to cyan.

use std::fmt;

use crate::curve::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// CSS hex notation, e.g. `#00ffff`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    CyanToBlue,
    BlueToMagenta,
    MagentaToRed,
    RedToYellow,
    YellowToGreen,
    GreenToCyan,
}

#[derive(Debug, Clone, Copy)]
struct SegmentSpec {
    held: Channel,
    ramp: Channel,
    direction: Ramp,
}

const SEGMENTS: [SegmentSpec; 6] = [
    SegmentSpec {
        held: Channel::Blue,
        ramp: Channel::Green,
        direction: Ramp::Falling,
    },
    SegmentSpec {
        held: Channel::Blue,
        ramp: Channel::Red,
        direction: Ramp::Rising,
    },
    SegmentSpec {
        held: Channel::Red,
        ramp: Channel::Blue,
        direction: Ramp::Falling,
    },
    SegmentSpec {
        held: Channel::Red,
        ramp: Channel::Green,
        direction: Ramp::Rising,
    },
    SegmentSpec {
        held: Channel::Green,
        ramp: Channel::Red,
        direction: Ramp::Falling,
    },
    SegmentSpec {
        held: Channel::Green,
        ramp: Channel::Blue,
        direction: Ramp::Rising,
    },
];

impl Segment {
    pub const ALL: [Segment; 6] = [
        Segment::CyanToBlue,
        Segment::BlueToMagenta,
        Segment::MagentaToRed,
        Segment::RedToYellow,
        Segment::YellowToGreen,
        Segment::GreenToCyan,
    ];

    /// Segment for an index, clamped to the last one.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn spec(self) -> &'static SegmentSpec {
        &SEGMENTS[self.index()]
    }

    pub fn held(self) -> Channel {
        self.spec().held
    }

    pub fn ramp(self) -> Channel {
        self.spec().ramp
    }

    pub fn direction(self) -> Ramp {
        self.spec().direction
    }

    /// Color at `level` (0 at the segment start, 255 at its end).
    pub fn color(self, level: u8) -> Rgb {
        let spec = self.spec();
        let mut rgb = Rgb::default();
        rgb.set(spec.held, 255);
        rgb.set(
            spec.ramp,
            match spec.direction {
                Ramp::Rising => level,
                Ramp::Falling => 255 - level,
            },
        );
        rgb
    }
}

/// Segment and ramp level for `t`. `t == interval.max` lands at the end of
/// the last segment; anything else outside the interval is wrapped first.
pub fn locate(t: f64, interval: Interval) -> (Segment, u8) {
    let t = if t >= interval.min && t <= interval.max {
        t
    } else {
        interval.wrap(t)
    };
    let width = interval.width() / Segment::ALL.len() as f64;
    let offset = t - interval.min;
    let segment = Segment::from_index((offset / width).floor().max(0.0) as usize);
    let local = offset - segment.index() as f64 * width;
    let level = (255.0 * local / width).floor().clamp(0.0, 255.0) as u8;
    (segment, level)
}

pub fn color_at(t: f64, interval: Interval) -> Rgb {
    let (segment, level) = locate(t, interval);
    segment.color(level)
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::constants::*;
use crate::error::{Result, SliderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Width,
    Height,
    Interval,
    Autoslide,
    ShowIndicator,
}

impl Param {
    pub const ALL: [Param; 5] = [
        Param::Width,
        Param::Height,
        Param::Interval,
        Param::Autoslide,
        Param::ShowIndicator,
    ];

    // Mount-time read order; `Width` recomputes the whole size
    pub const MOUNT_ORDER: [Param; 4] = [
        Param::Width,
        Param::Interval,
        Param::Autoslide,
        Param::ShowIndicator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::Width => "width",
            Param::Height => "height",
            Param::Interval => "interval",
            Param::Autoslide => "autoslide",
            Param::ShowIndicator => "show-indicator",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Param {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        Param::ALL
            .into_iter()
            .find(|param| param.name() == s)
            .ok_or_else(|| SliderError::UnknownParameter(s.to_string()))
    }
}

/// Attribute store: a parameter is present when it has an entry, whatever
/// its value. Flags (`autoslide`, `show-indicator`) only care about presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: HashMap<Param, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, param: Param, value: impl Into<String>) -> Self {
        self.set(param, value);
        self
    }

    pub fn set(&mut self, param: Param, value: impl Into<String>) {
        self.values.insert(param, value.into());
    }

    pub fn remove(&mut self, param: Param) -> bool {
        self.values.remove(&param).is_some()
    }

    pub fn get(&self, param: Param) -> Option<&str> {
        self.values.get(&param).map(String::as_str)
    }

    pub fn has(&self, param: Param) -> bool {
        self.values.contains_key(&param)
    }
}

// Leading-digit parse: "5000ms" is 5000, "abc" is None. Digit runs that
// overflow i64 are rejected as well.
pub fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

// A missing attribute is as invalid as a malformed one
pub fn parse_interval(raw: Option<&str>) -> Result<u64> {
    let raw = raw.unwrap_or_default();
    match parse_integer_prefix(raw) {
        Some(ms) if ms > 0 => Ok(ms as u64),
        _ => Err(SliderError::InvalidInterval(raw.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Pixels(f32),
    Percent(f32),
}

impl Dimension {
    pub fn resolve(self, available: f32) -> f32 {
        match self {
            Dimension::Pixels(px) => px,
            Dimension::Percent(pct) => available * pct / 100.0,
        }
    }
}

impl FromStr for Dimension {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(n) => (n, true),
            None => (trimmed.strip_suffix("px").unwrap_or(trimmed), false),
        };
        match number.trim_end().parse::<f32>() {
            Ok(value) if value.is_finite() && value >= 0.0 && percent => Ok(Dimension::Percent(value)),
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Dimension::Pixels(value)),
            _ => Err(SliderError::InvalidDimension(s.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{px}px"),
            Dimension::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: Dimension::Percent(100.0),
            height: Dimension::Pixels(300.0),
        }
    }
}

impl Size {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let defaults = Size::default();
        Self {
            width: read_dimension(attributes, Param::Width, DEFAULT_WIDTH, defaults.width),
            height: read_dimension(attributes, Param::Height, DEFAULT_HEIGHT, defaults.height),
        }
    }
}

fn read_dimension(attributes: &Attributes, param: Param, default_text: &str, default: Dimension) -> Dimension {
    let raw = attributes.get(param).unwrap_or(default_text);
    raw.parse().unwrap_or_else(|e: SliderError| {
        warn!("Ignoring {param}: {e}, using {default}");
        default
    })
}

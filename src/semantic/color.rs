//! Color codec: raw value text → canonical `#rrggbb`, plus light/dark
//! classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::base::constants::{
    DARK_FOREGROUND, LIGHT_FOREGROUND, LUMINANCE_THRESHOLD, LUMINANCE_WEIGHTS, OPAQUE_SUFFIX,
};

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*[0-9.]+\s*)?\)",
    )
    .expect("Invalid regex")
});

// ASCII word boundaries: a trailing non-ASCII letter still ends the literal.
static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Fa-f]{6})(?-u:\b)").expect("Invalid regex"));

static HEX3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Fa-f]{3})(?-u:\b)").expect("Invalid regex"));

/// A color normalised to three 8-bit channels. Displays as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CanonicalColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse strict `#rrggbb` text (either case).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Weighted channel sum scaled to `0.0..=1.0`. No gamma correction.
    pub fn luminance(&self) -> f64 {
        let weighted: f64 = self
            .channels()
            .iter()
            .zip(LUMINANCE_WEIGHTS)
            .map(|(&channel, weight)| weight * f64::from(channel))
            .sum();
        weighted / 255.0
    }

    pub fn is_light(&self) -> bool {
        self.luminance() > LUMINANCE_THRESHOLD
    }

    /// Readable text color on top of this color.
    pub fn contrast_foreground(&self) -> &'static str {
        if self.is_light() {
            DARK_FOREGROUND
        } else {
            LIGHT_FOREGROUND
        }
    }

    /// Key batching fully opaque backgrounds of this color (`#rrggbbFF`).
    pub fn background_key(&self) -> String {
        format!("{self}{OPAQUE_SUFFIX}")
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Convert a raw value into a canonical color.
///
/// Tries, in order: `rgb()`/`rgba()` notation (alpha dropped), a 6-digit hex
/// literal, then a 3-digit hex literal. Each pattern may appear anywhere in
/// the value. Returns `None` for named colors, variable references and
/// anything else.
pub fn to_canonical_hex(raw: &str) -> Option<CanonicalColor> {
    let value = raw.trim();

    if let Some(caps) = RGB_FUNCTION.captures(value) {
        let channel = |i: usize| clamp_channel(&caps[i]);
        return Some(CanonicalColor::new(channel(1), channel(2), channel(3)));
    }

    if let Some(caps) = HEX6.captures(value) {
        return CanonicalColor::parse_hex(&format!("#{}", &caps[1]));
    }

    if let Some(caps) = HEX3.captures(value) {
        let expanded: String = caps[1].chars().flat_map(|c| [c, c]).collect();
        return CanonicalColor::parse_hex(&format!("#{expanded}"));
    }

    None
}

/// Classify canonical `#rrggbb` text; malformed text counts as dark.
pub fn is_light(hex: &str) -> bool {
    CanonicalColor::parse_hex(hex).is_some_and(|color| color.is_light())
}

/// Decimal channel text, clamped to 255.
fn clamp_channel(digits: &str) -> u8 {
    digits
        .parse::<u32>()
        .map_or(u8::MAX, |value| value.min(u32::from(u8::MAX)) as u8)
}

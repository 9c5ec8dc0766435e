//! This module defines the two color representations the crate trades in: [`HexColor`], a
//! validated sRGB hex code as the user typed it, and [`LabColor`], a point in the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). Formally the three CIELAB values
//! are called L\*, a\*, and b\* to distinguish them from generic Lab, but for convenience they are
//! just `l`, `a`, and `b` here. Parsing failures are described by [`HexParseError`], which keeps
//! enough detail for a UI to tell the user what was wrong with their input.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

lazy_static! {
    // the one true hex color shape: a hash, then exactly six hex digits in either case
    static ref HEX_CODE: Regex = Regex::new("^#[0-9a-fA-F]{6}$").unwrap();
}

/// An error that describes why a string failed to parse as a hex color code. Each variant
/// pinpoints the first check that failed, in the order the checks run: prefix, then length, then
/// digit validity. Derives `PartialEq` so callers and tests can match on the exact failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexParseError {
    /// The string doesn't start with `#`.
    MissingHash,
    /// The string isn't exactly seven characters (`#` plus six digits). Three-digit shorthand
    /// like `#fff` is deliberately not accepted: every channel must be spelled out.
    WrongLength,
    /// The string has the right shape but contains a character outside `0-9`, `a-f`, `A-F`.
    InvalidHexDigit,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            HexParseError::MissingHash => "hex color must start with '#'",
            HexParseError::WrongLength => "hex color must be '#' followed by exactly 6 digits",
            HexParseError::InvalidHexDigit => "hex color contains a non-hexadecimal character",
        };
        write!(f, "{}", msg)
    }
}

impl Error for HexParseError {}

/// A validated sRGB color in `#rrggbb` hex notation. The only way to get one is through parsing,
/// so holding a `HexColor` is proof the text inside is well-formed. The original casing is kept
/// as entered: `#FF8000` stays `#FF8000` in plot labels and CSV output rather than being
/// normalized, since the exported table should echo what the user typed.
///
/// # Example
/// ```
/// use hexlab::color::{HexColor, HexParseError};
/// let teal: HexColor = "#008080".parse().unwrap();
/// assert_eq!(teal.channels(), (0, 128, 128));
/// let bad = "008080".parse::<HexColor>();
/// assert_eq!(bad, Err(HexParseError::MissingHash));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HexColor(String);

impl HexColor {
    /// Parses and validates a hex code. Equivalent to the `FromStr` impl; provided because
    /// `HexColor::new(s)` often reads better than `s.parse()` at call sites.
    pub fn new(s: &str) -> Result<HexColor, HexParseError> {
        s.parse()
    }

    /// The hex code as a string slice, exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the code into its three 8-bit channels `(r, g, b)`.
    pub fn channels(&self) -> (u8, u8, u8) {
        // the constructor guarantees 7 ASCII bytes of valid hex, so neither the slicing nor the
        // radix parse can fail
        let r = u8::from_str_radix(&self.0[1..3], 16).unwrap();
        let g = u8::from_str_radix(&self.0[3..5], 16).unwrap();
        let b = u8::from_str_radix(&self.0[5..7], 16).unwrap();
        (r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<HexColor, HexParseError> {
        if !s.starts_with('#') {
            return Err(HexParseError::MissingHash);
        }
        if s.chars().count() != 7 {
            return Err(HexParseError::WrongLength);
        }
        if !HEX_CODE.is_match(s) {
            return Err(HexParseError::InvalidHexDigit);
        }
        Ok(HexColor(s.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A color in the CIELAB color space, derived from exactly one [`HexColor`]. CIELAB is
/// device-independent and perceptually motivated: distances here track how different two colors
/// look far better than distances between hex codes do, which is the whole reason the palette
/// tool plots in this space. Values are never stored alongside the palette; they are recomputed
/// from the hex codes whenever a view or export needs them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct LabColor {
    /// The luminance (loosely, brightness) of the color. 0 is black and 100 is diffuse white;
    /// conversions from displayable sRGB land in that range up to rounding.
    pub l: f64,
    /// The first opponent color axis, running green (negative) to red (positive). Unbounded by
    /// the math, but displayable sRGB stays within roughly -128 to 127.
    pub a: f64,
    /// The second opponent color axis, running blue (negative) to yellow (positive), with the
    /// same conventional range as `a`.
    pub b: f64,
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parse_ok() {
        let white: HexColor = "#ffffff".parse().unwrap();
        assert_eq!(white.as_str(), "#ffffff");
        assert_eq!(white.channels(), (255, 255, 255));
        // mixed case is accepted and preserved verbatim
        let loud: HexColor = "#FfA500".parse().unwrap();
        assert_eq!(loud.to_string(), "#FfA500");
        assert_eq!(loud.channels(), (255, 165, 0));
    }

    #[test]
    fn test_hex_parse_errors() {
        assert_eq!("ffffff".parse::<HexColor>(), Err(HexParseError::MissingHash));
        assert_eq!("#fff".parse::<HexColor>(), Err(HexParseError::WrongLength));
        assert_eq!("#ffffffff".parse::<HexColor>(), Err(HexParseError::WrongLength));
        assert_eq!("#ggffff".parse::<HexColor>(), Err(HexParseError::InvalidHexDigit));
        assert_eq!("notahex".parse::<HexColor>(), Err(HexParseError::MissingHash));
        // non-ASCII sneaking into the digit positions
        assert_eq!("#fffffé".parse::<HexColor>(), Err(HexParseError::InvalidHexDigit));
        assert_eq!("".parse::<HexColor>(), Err(HexParseError::MissingHash));
    }

    #[test]
    fn test_error_messages_mention_the_problem() {
        assert!(HexParseError::MissingHash.to_string().contains('#'));
        assert!(HexParseError::WrongLength.to_string().contains('6'));
    }
}

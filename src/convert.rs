//! This module implements the conversion pipeline from an sRGB hex code to a CIELAB color:
//! channel normalization, inverse sRGB companding, the linear-RGB → XYZ matrix transform under
//! D65, and finally the CIELAB nonlinearity. Each stage is a pure function with no state, so the
//! whole pipeline is deterministic: the same hex code always produces bit-identical L\*a\*b\*
//! values. The stages are public individually because the intermediate XYZ representation is
//! occasionally useful on its own and because it makes each step testable against the standards.

use color::{HexColor, HexParseError, LabColor};
use consts::{D65_WHITE_POINT, SRGB_LINEAR_THRESHOLD, SRGB_TO_XYZ_MAT};

/// Undoes the sRGB companding on one encoded channel value in [0, 1], returning the linear-light
/// value the gamma curve was protecting. Below the breakpoint the curve is a straight line
/// through the origin; above it, a 2.4 power law with an offset.
pub fn linearize(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts 8-bit sRGB channels to CIE XYZ tristimulus values `[X, Y, Z]` under the D65
/// illuminant: normalize each channel to [0, 1], linearize, then multiply by the standard sRGB
/// primaries matrix.
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> [f64; 3] {
    let rgb_lin = [
        linearize(f64::from(r) / 255.0),
        linearize(f64::from(g) / 255.0),
        linearize(f64::from(b) / 255.0),
    ];
    let mut xyz = [0.0; 3];
    for i in 0..3 {
        xyz[i] = SRGB_TO_XYZ_MAT[i][0] * rgb_lin[0]
            + SRGB_TO_XYZ_MAT[i][1] * rgb_lin[1]
            + SRGB_TO_XYZ_MAT[i][2] * rgb_lin[2];
    }
    xyz
}

/// Converts a D65 XYZ color to CIELAB. The XYZ coordinates are first scaled by the D65 white
/// point, then pushed through the cube-root nonlinearity that models the human response to
/// luminance, and finally combined into one luminance and two opponent color axes.
pub fn xyz_to_lab(xyz: [f64; 3]) -> LabColor {
    // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
    let f = |t: f64| {
        let delta: f64 = 6.0 / 29.0;
        if t > delta.powi(3) {
            t.powf(1.0 / 3.0)
        } else {
            t / (3.0 * delta * delta) + 4.0 / 29.0
        }
    };
    let fx = f(xyz[0] / D65_WHITE_POINT[0]);
    let fy = f(xyz[1] / D65_WHITE_POINT[1]);
    let fz = f(xyz[2] / D65_WHITE_POINT[2]);

    // note how a and b are opponent color axes built from differences of the transformed values
    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Runs the full pipeline on an already-validated hex color. Infallible: holding a [`HexColor`]
/// means the parse already succeeded, so the only work left is arithmetic.
pub fn hex_to_lab(hex: &HexColor) -> LabColor {
    let (r, g, b) = hex.channels();
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Parses a hex string and converts it to CIELAB in one step. This is the entry point for
/// callers holding raw user input; anything malformed comes back as a [`HexParseError`] without
/// any conversion work being done.
///
/// # Example
/// ```
/// use hexlab::convert::hex_str_to_lab;
/// let white = hex_str_to_lab("#ffffff").unwrap();
/// assert!((white.l - 100.0).abs() <= 0.5);
/// assert!(hex_str_to_lab("white").is_err());
/// ```
pub fn hex_str_to_lab(s: &str) -> Result<LabColor, HexParseError> {
    let hex: HexColor = s.parse()?;
    Ok(hex_to_lab(&hex))
}

/// Converts a sequence of hex strings to CIELAB colors, preserving order. The conversion is
/// atomic: if any element fails to parse, the whole batch fails and no partial output is
/// returned. That matches how the palette views use it, where the rows are rebuilt from scratch
/// on every observation and a half-converted table would be worse than none.
pub fn hex_list_to_lab<I, S>(hexes: I) -> Result<Vec<LabColor>, HexParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hexes
        .into_iter()
        .map(|s| hex_str_to_lab(s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_and_black_endpoints() {
        let white = hex_str_to_lab("#ffffff").unwrap();
        assert!(approx_eq!(f64, white.l, 100.0, epsilon = 0.5));
        assert!(approx_eq!(f64, white.a, 0.0, epsilon = 0.5));
        assert!(approx_eq!(f64, white.b, 0.0, epsilon = 0.5));

        let black = hex_str_to_lab("#000000").unwrap();
        assert!(approx_eq!(f64, black.l, 0.0, epsilon = 0.5));
        assert!(approx_eq!(f64, black.a, 0.0, epsilon = 0.5));
        assert!(approx_eq!(f64, black.b, 0.0, epsilon = 0.5));
    }

    #[test]
    fn test_mid_gray() {
        // the canonical mid-gray check: L* of #808080 is about 53.59, and a neutral gray has no
        // chromaticity on either opponent axis
        let gray = hex_str_to_lab("#808080").unwrap();
        assert!(approx_eq!(f64, gray.l, 53.59, epsilon = 0.5));
        assert!(approx_eq!(f64, gray.a, 0.0, epsilon = 0.5));
        assert!(approx_eq!(f64, gray.b, 0.0, epsilon = 0.5));
    }

    #[test]
    fn test_primaries_land_where_expected() {
        // reference values for the sRGB primaries under D65, from the standard transform
        let red = hex_str_to_lab("#ff0000").unwrap();
        assert!(approx_eq!(f64, red.l, 53.24, epsilon = 0.5));
        assert!(approx_eq!(f64, red.a, 80.09, epsilon = 0.5));
        assert!(approx_eq!(f64, red.b, 67.20, epsilon = 0.5));

        let green = hex_str_to_lab("#00ff00").unwrap();
        assert!(approx_eq!(f64, green.l, 87.73, epsilon = 0.5));
        assert!(approx_eq!(f64, green.a, -86.18, epsilon = 0.5));
        assert!(approx_eq!(f64, green.b, 83.18, epsilon = 0.5));

        let blue = hex_str_to_lab("#0000ff").unwrap();
        assert!(approx_eq!(f64, blue.l, 32.30, epsilon = 0.5));
        assert!(approx_eq!(f64, blue.a, 79.19, epsilon = 0.5));
        assert!(approx_eq!(f64, blue.b, -107.86, epsilon = 0.5));
    }

    #[test]
    fn test_linearize_is_continuous_at_the_breakpoint() {
        let below = linearize(0.04045);
        let above = linearize(0.040451);
        assert!((below - above).abs() <= 1e-5);
    }

    #[test]
    fn test_luminance_monotonic_in_each_channel() {
        // raising any one channel adds light, so L* must never decrease
        let mut last_l = -1.0;
        for v in 0..=255u16 {
            let lab = xyz_to_lab(rgb_to_xyz(v as u8, 40, 200));
            assert!(lab.l >= last_l);
            last_l = lab.l;
        }
        let mut last_l = -1.0;
        for v in 0..=255u16 {
            let lab = xyz_to_lab(rgb_to_xyz(12, v as u8, 99));
            assert!(lab.l >= last_l);
            last_l = lab.l;
        }
        let mut last_l = -1.0;
        for v in 0..=255u16 {
            let lab = xyz_to_lab(rgb_to_xyz(255, 0, v as u8));
            assert!(lab.l >= last_l);
            last_l = lab.l;
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let labs = hex_list_to_lab(vec!["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        assert_eq!(labs.len(), 3);
        // red and blue are darker than green; order tells us which row is which
        assert!(labs[1].l > labs[0].l);
        assert!(labs[1].l > labs[2].l);
        assert!(labs[0].a > 0.0 && labs[1].a < 0.0);
    }

    #[test]
    fn test_batch_fails_atomically() {
        let result = hex_list_to_lab(vec!["#ff0000", "oops", "#0000ff"]);
        assert_eq!(result, Err(HexParseError::MissingHash));
        let empty: Vec<&str> = vec![];
        assert_eq!(hex_list_to_lab(empty).unwrap().len(), 0);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let one = hex_str_to_lab("#12ab9f").unwrap();
        let two = hex_str_to_lab("#12ab9f").unwrap();
        assert_eq!(one, two);
    }
}

//! This file provides the constants used in color space conversion, kept in one place so that the
//! values can be checked against the published standards at a glance instead of being scattered
//! through the arithmetic that uses them. Every constant here comes straight from the sRGB and
//! CIELAB specifications; none are tuned or derived at runtime.

/// The linear-RGB → CIE XYZ transform for the sRGB primaries under D65, in row-major order. These
/// are the values from IEC 61966-2-1 at seven decimal places.
pub static SRGB_TO_XYZ_MAT: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// The D65 reference white point `[Xn, Yn, Zn]`, normalized so that Yn is 1. XYZ coordinates are
/// divided through by this before the CIELAB nonlinearity is applied.
pub static D65_WHITE_POINT: [f64; 3] = [0.95047, 1.0, 1.08883];

/// The sRGB companding breakpoint: encoded values at or below this are in the linear toe segment.
pub static SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_rows_sum_to_white() {
        // feeding linear RGB (1, 1, 1) through the matrix must land exactly on the white point,
        // which is how the standard values were balanced in the first place
        for i in 0..3 {
            let row_sum: f64 = SRGB_TO_XYZ_MAT[i].iter().sum();
            assert!((row_sum - D65_WHITE_POINT[i]).abs() <= 1e-4);
        }
    }
}

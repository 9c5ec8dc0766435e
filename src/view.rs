//! This module assembles the derived views of a palette: the `(hex, L*, a*, b*)` table rows that
//! back the CSV export and the 3D points the scatter plot consumes. Nothing here is cached.
//! Every call walks the palette in insertion order and reconverts each color from scratch, so an
//! observation is always consistent with the palette as it stands at that moment. The palettes
//! are human-entered and small, which makes the redundant arithmetic a non-issue compared to the
//! staleness bugs a cache would invite.

use color::{HexColor, LabColor};
use convert::hex_to_lab;
use palette::Palette;

/// The plot range published for both opponent axes (a\* on x, b\* on y). Displayable sRGB can
/// poke slightly outside ±100, but a fixed symmetric range keeps successive renders comparable.
pub static AB_AXIS_RANGE: (f64, f64) = (-100.0, 100.0);

/// The plot range for the luminance axis (L\* on z).
pub static L_AXIS_RANGE: (f64, f64) = (0.0, 100.0);

/// One row of the derived table: a palette entry alongside its CIELAB coordinates. The serde
/// names are the exported CSV column headers, which is why they carry the `*` notation rather
/// than being bare field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabRow {
    /// The hex code exactly as it sits in the palette.
    #[serde(rename = "HEX")]
    pub hex: HexColor,
    /// CIELAB luminance.
    #[serde(rename = "L*")]
    pub l: f64,
    /// CIELAB green–red opponent axis.
    #[serde(rename = "a*")]
    pub a: f64,
    /// CIELAB blue–yellow opponent axis.
    #[serde(rename = "b*")]
    pub b: f64,
}

/// One marker in the 3D scatter view. The CIELAB axes are mapped the way the original tool plots
/// them: a\* on x, b\* on y, L\* on z, with the marker painted in the color it represents so the
/// plot doubles as a swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    /// The hex code, shown as the marker's text label.
    pub label: HexColor,
    /// a\* coordinate.
    pub x: f64,
    /// b\* coordinate.
    pub y: f64,
    /// L\* coordinate.
    pub z: f64,
    /// The fill color for the marker, which is just the entry itself.
    pub marker_color: HexColor,
}

/// Builds the full derived table for the palette, one row per entry in insertion order. The
/// returned length always equals `palette.len()`: every color in the palette is valid by
/// construction, so conversion cannot drop rows.
pub fn lab_rows(palette: &Palette) -> Vec<LabRow> {
    palette
        .iter()
        .map(|hex| {
            let lab: LabColor = hex_to_lab(hex);
            LabRow {
                hex: hex.clone(),
                l: lab.l,
                a: lab.a,
                b: lab.b,
            }
        })
        .collect()
}

/// Builds the scatter markers for the palette, in insertion order.
pub fn scatter_points(palette: &Palette) -> Vec<ScatterPoint> {
    lab_rows(palette)
        .into_iter()
        .map(|row| ScatterPoint {
            label: row.hex.clone(),
            x: row.a,
            y: row.b,
            z: row.l,
            marker_color: row.hex,
        })
        .collect()
}

//! This module brings the most common hexlab functionality under a single namespace, to prevent
//! excessive imports: the two color types and their parse error, the palette with its action
//! enum, the conversion entry points, and the view-row builders. The individual pipeline stages
//! in [`convert`](../convert/index.html) and the axis-range constants are deliberately left out;
//! reach into their modules when you need them.

pub use color::{HexColor, HexParseError, LabColor};
pub use convert::{hex_list_to_lab, hex_str_to_lab, hex_to_lab};
pub use export::{csv_bytes, write_csv, CSV_FILENAME};
pub use palette::{Palette, PaletteAction};
pub use view::{lab_rows, scatter_points, LabRow, ScatterPoint};

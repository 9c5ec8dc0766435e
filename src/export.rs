//! This module emits the palette's derived table as CSV for the download boundary: a `HEX, L*,
//! a*, b*` header followed by one row per palette entry in insertion order, UTF-8 encoded. The
//! actual download plumbing (content types, buttons, browsers) is a collaborator's problem; this
//! module only produces the bytes and publishes the filename they conventionally travel under.

use std::io;

use csv;

use palette::Palette;
use view::lab_rows;

/// The filename the export conventionally travels under when the download collaborator saves it.
pub static CSV_FILENAME: &str = "hex_to_lab_colors.csv";

/// Writes the palette's full derived table as CSV into `writer`. The header row is always
/// present, even for an empty palette: a downloaded file with just column names is more useful
/// than a zero-byte one.
pub fn write_csv<W: io::Write>(palette: &Palette, writer: W) -> Result<(), csv::Error> {
    // the csv crate only emits serde-derived headers once a first record is serialized, which
    // would leave an empty palette exporting zero bytes; writing the header ourselves keeps the
    // header-always-present guarantee
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(&["HEX", "L*", "a*", "b*"])?;
    for row in lab_rows(palette) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the CSV into an in-memory buffer, which is the shape the download boundary wants:
/// a blob of bytes it can hand to the user without this crate touching the filesystem.
pub fn csv_bytes(palette: &Palette) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_csv(palette, &mut buf)?;
    Ok(buf)
}

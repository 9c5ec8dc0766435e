//! This module implements the palette itself: an ordered, append-only list of accepted hex colors
//! and the three operations that are allowed to change it. The interaction model is deliberately
//! narrow. Colors are only ever added at the end, only the most recent addition can be removed,
//! and the whole list can be wiped; there is no reordering, no in-place editing, and no removal
//! from the middle. Everything downstream (the scatter view, the CSV table) is derived from the
//! list on demand, so as long as these three mutators behave, the views cannot go stale.

use std::slice;

use color::{HexColor, HexParseError};

/// One of the three signals the UI can send at the palette. Modeling them as data keeps the
/// boundary between the widget shell and this crate to a single channel: whatever buttons or
/// pickers exist out there, they reduce to a stream of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Validate the contained string and, if it is a well-formed hex code, append it.
    Append(String),
    /// Remove the most recently appended color, if any.
    Undo,
    /// Remove every color.
    Clear,
}

/// The ordered list of colors the user has accepted this session, oldest first. Duplicates are
/// allowed: entering `#ff0000` twice genuinely means two red rows in the export. One palette
/// exists per interactive session and it lives entirely in memory; there is no persistence and
/// no sharing between sessions.
///
/// # Example
/// ```
/// use hexlab::palette::Palette;
/// let mut palette = Palette::new();
/// palette.append("#ff0000").unwrap();
/// palette.append("#00ff00").unwrap();
/// assert!(palette.append("not a color").is_err());
/// palette.undo_last();
/// assert_eq!(palette.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    /// Creates an empty palette, the state every session starts in.
    pub fn new() -> Palette {
        Palette { colors: Vec::new() }
    }

    /// Creates a palette pre-seeded with the given colors, in order. Useful for sessions that
    /// start from a stock color list rather than from nothing.
    pub fn from_colors(colors: Vec<HexColor>) -> Palette {
        Palette { colors }
    }

    /// Validates `hex` and appends it to the end of the palette, returning a reference to the
    /// accepted color. On a parse failure the palette is untouched: validation happens entirely
    /// before mutation, so there is no partially-updated state to observe.
    pub fn append(&mut self, hex: &str) -> Result<&HexColor, HexParseError> {
        let color: HexColor = hex.parse()?;
        self.colors.push(color);
        // the push just happened, so last() is always Some here
        Ok(self.colors.last().unwrap())
    }

    /// Appends an already-validated color. For callers that parsed up front and want to keep the
    /// proof of validity instead of round-tripping through a string.
    pub fn push(&mut self, color: HexColor) {
        self.colors.push(color);
    }

    /// Removes and returns the most recently appended color. On an empty palette this is a
    /// silent no-op returning `None`, not an error: an undo button with nothing to undo does
    /// nothing.
    pub fn undo_last(&mut self) -> Option<HexColor> {
        self.colors.pop()
    }

    /// Unconditionally empties the palette. Idempotent: clearing an already-empty palette is
    /// fine and does nothing.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Applies one UI action. `Undo` and `Clear` always succeed; `Append` can report a parse
    /// error, in which case the palette is unchanged.
    pub fn apply(&mut self, action: PaletteAction) -> Result<(), HexParseError> {
        match action {
            PaletteAction::Append(hex) => {
                self.append(&hex)?;
            }
            PaletteAction::Undo => {
                self.undo_last();
            }
            PaletteAction::Clear => self.clear(),
        }
        Ok(())
    }

    /// The number of colors currently held.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over the colors in insertion order.
    pub fn iter(&self) -> slice::Iter<HexColor> {
        self.colors.iter()
    }

    /// The colors as a slice, oldest first.
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexColor;
    type IntoIter = slice::Iter<'a, HexColor>;

    fn into_iter(self) -> slice::Iter<'a, HexColor> {
        self.colors.iter()
    }
}

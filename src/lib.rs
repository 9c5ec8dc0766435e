//! Hexlab is the conversion and state core of an interactive palette tool: the user enters sRGB
//! colors as hex codes, each one is carried through the standard sRGB → CIE XYZ → CIE L\*a\*b\*
//! transform chain, and the resulting table feeds a 3D scatter view and a CSV export. This crate
//! deliberately contains no UI: the widgets that produce hex strings and the plot that consumes
//! L\*a\*b\* points are collaborators on the other side of the API. What lives here is the math,
//! done exactly per the colorimetric standards rather than approximated, and the small append-only
//! state machine that keeps the palette and everything derived from it consistent.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.4124564 with 0.41_24_564
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod color;
mod consts;
pub mod convert;
pub mod export;
pub mod palette;
pub mod prelude;
pub mod view;

//! Raster rendering of encoded symbols.

mod paint;

pub use paint::{SymbolLayout, render_symbol_image};

//! Core library for EAN-13 encoding and rendering.

mod encoding;
mod graphics;
mod identifier;
mod symbol;

pub use encoding::{
    CENTER_GUARD, DigitPattern, DigitTables, MODULE_COUNT, ModuleString, PARITY_PATTERNS,
    ParityGroup, R_PATTERNS, SIDE_GUARD, is_guard_module, module_string, parity_pattern,
};
pub use graphics::{SymbolLayout, render_symbol_image};
pub use identifier::{Ean13Error, Identifier, check_digit};
pub use symbol::Ean13Symbol;

use anyhow::{Context, Result};
use std::path::Path;

/// Validates a raw digit string and derives its 95-module bar pattern.
pub fn encode(raw: &str) -> Result<ModuleString, Ean13Error> {
    let identifier = Identifier::parse(raw)?;
    Ok(module_string(&identifier))
}

/// Renders a validated symbol with the default layout and writes it as PNG.
pub fn render_to_file(
    identifier: &Identifier,
    modules: &ModuleString,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let image = render_symbol_image(identifier, modules, &SymbolLayout::default());
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

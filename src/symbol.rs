use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::encoding::{ModuleString, module_string};
use crate::graphics::{SymbolLayout, render_symbol_image};
use crate::identifier::{Ean13Error, Identifier};

/// A validated identifier together with its derived bar/space pattern.
///
/// Encoding happens once at construction; the symbol is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Ean13Symbol {
    identifier: Identifier,
    modules: ModuleString,
}

impl Ean13Symbol {
    /// Validates the raw digit string and derives its module string.
    pub fn new(raw: &str) -> Result<Self, Ean13Error> {
        let identifier = Identifier::parse(raw)?;
        let modules = module_string(&identifier);
        Ok(Self {
            identifier,
            modules,
        })
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn modules(&self) -> &ModuleString {
        &self.modules
    }

    /// Paint the symbol onto a fresh RGB canvas.
    pub fn render_image(&self, layout: &SymbolLayout) -> RgbImage {
        render_symbol_image(&self.identifier, &self.modules, layout)
    }

    /// Render with the default layout and persist as PNG.
    pub fn save_image_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = self.render_image(&SymbolLayout::default());
        image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

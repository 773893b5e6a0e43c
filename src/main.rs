use anyhow::Result;
use clap::Parser;
use ean13::Ean13Symbol;
use std::path::PathBuf;

/// Encode a 13-digit identifier as an EAN-13 barcode image.
#[derive(Parser, Debug)]
#[command(name = "ean13", version, about = "Generate EAN-13 barcode images (PNG)")]
struct Cli {
    /// 13-digit identifier; whitespace between digits is ignored
    number: String,

    /// Output image path
    #[arg(short, long, default_value = "barcode.png")]
    output: PathBuf,

    /// Print the 95-module bar pattern to stdout instead of writing an image
    #[arg(long)]
    modules: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let symbol = Ean13Symbol::new(&cli.number)?;

    if cli.modules {
        println!("{}", symbol.modules());
    } else {
        symbol.save_image_to(&cli.output)?;
        println!("Rendered {} to {}", symbol.identifier(), cli.output.display());
    }

    Ok(())
}

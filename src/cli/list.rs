//! List command implementation.
//!
//! Prints the asset catalog to stdout, one asset per line.

use std::io::{self, Write};

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sprites::{catalog, Asset};

/// List the asset catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show animation sheets
    #[arg(long)]
    pub sheets: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let assets: Vec<Asset> = catalog()
        .into_iter()
        .filter(|a| !args.sheets || a.is_sheet())
        .collect();

    let mut stdout = io::stdout().lock();
    for asset in &assets {
        writeln!(stdout, "{}", format_row(asset))?;
    }

    printer.info("Listed", &plural(assets.len(), "asset", "assets"));
    Ok(())
}

/// `name  WxH  frames`, with the name padded to line up the columns.
fn format_row(asset: &Asset) -> String {
    let size = format!("{}x{}", asset.width, asset.height);
    if asset.is_sheet() {
        format!("{:<18} {:>7}  x{}", asset.name, size, asset.frames())
    } else {
        format!("{:<18} {:>7}", asset.name, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::find;

    #[test]
    fn test_format_image_row() {
        let row = format_row(&find("archer_tower").unwrap());
        assert_eq!(row, "archer_tower         32x48");
    }

    #[test]
    fn test_format_sheet_row() {
        let row = format_row(&find("fireball_explode").unwrap());
        assert_eq!(row, "fireball_explode     48x48  x4");
    }

    #[test]
    fn test_run_lists_sheets() {
        run(ListArgs { sheets: true }, &Printer::new()).unwrap();
    }
}

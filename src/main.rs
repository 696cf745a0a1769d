//! gridcalc - evaluate a tabular sheet file and write the results.
//!
//! Usage: `gridcalc <input-file> <output-file>`. Reports `Argument Error`
//! when not given exactly two arguments and `File Error` on any read/write
//! failure; everything else (bad tokens, malformed formulas, cycles) is
//! reported in-band as `#…` codes in the output table.

use std::env;
use std::path::Path;

use anyhow::Context;
use gridcalc_core::Document;

fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    let doc = Document::load(input).with_context(|| format!("reading {}", input.display()))?;
    doc.evaluate();
    doc.write_to(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("Argument Error");
        return;
    }

    if let Err(e) = run(Path::new(&args[1]), Path::new(&args[2])) {
        eprintln!("Error: {:#}", e);
        println!("File Error");
    }
}

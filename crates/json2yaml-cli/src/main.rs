//! `json2yaml` CLI — convert streams of JSON values into YAML documents.
//!
//! ## Usage
//!
//! ```sh
//! # stdin → stdout
//! echo '{"name":"Alice","tags":["a","b"]}' | json2yaml
//!
//! # Several files into one YAML stream, separated by `---`
//! json2yaml a.json b.json
//!
//! # Write to a file
//! json2yaml -o out.yaml in.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use json2yaml_core::{Converter, Options, DEFAULT_MAX_DEPTH};
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Parser)]
#[command(
    name = "json2yaml",
    version,
    about = "Convert JSON values to YAML block-style documents"
)]
struct Cli {
    /// Input files ("-" for stdin; reads stdin if omitted)
    files: Vec<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut out: BufWriter<Box<dyn Write>> = BufWriter::new(open_output(cli.output.as_deref())?);
    let mut converter = Converter::with_options(Options::new().with_max_depth(cli.max_depth));

    let inputs = if cli.files.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.files
    };

    let result = convert_all(&mut converter, &inputs, &mut out);
    // Whatever was converted before a failure is still written out.
    let flushed = out.flush().context("Failed to write output");
    result?;
    flushed
}

fn convert_all(converter: &mut Converter, inputs: &[String], out: &mut impl Write) -> Result<()> {
    for input in inputs {
        if input == "-" {
            converter
                .convert(&mut *out, io::stdin().lock())
                .context("Failed to convert <stdin>")?;
        } else {
            let file =
                File::open(input).with_context(|| format!("Failed to read file: {}", input))?;
            converter
                .convert(&mut *out, file)
                .with_context(|| format!("Failed to convert {}", input))?;
        }
    }
    Ok(())
}

fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to write file: {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

//! swigdoc — generate SWIG docstring directives from extracted C++ documentation.
//!
//! Reads the documentation IR (JSON) produced by the C++ extractor and writes
//! a `docstrings.i` interface file with one `%feature("docstring")` block per
//! documented class and function:
//!
//! - `swigdoc ir.json` writes `docstrings.i`
//! - `swigdoc -o build/docstrings.i --namespace dolfin < ir.json`

mod emit;
mod error;
mod format;
mod group;
mod links;
mod model;
mod pipeline;
mod signature;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "swigdoc",
    about = "Generate SWIG docstring directives from extracted C++ documentation"
)]
struct Cli {
    /// Documentation IR (JSON). Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Output interface file, replaced on every run
    #[arg(short = 'o', long, default_value = "docstrings.i")]
    output: PathBuf,

    /// Namespace for every symbol. Defaults to each module's name.
    #[arg(short = 'n', long)]
    namespace: Option<String>,

    /// Sphinx role used for links to known classes
    #[arg(long, default_value = ":py:class:")]
    role: String,

    /// Indentation of overloaded-version sections
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Only generate these modules. Can be specified multiple times.
    #[arg(long = "module")]
    modules: Vec<String>,

    /// Only generate these headers. Can be specified multiple times.
    #[arg(long = "header")]
    headers: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let doc = read_documentation(cli.input.as_deref())?;

    let options = pipeline::GenerateOptions {
        namespace: cli.namespace,
        role: cli.role,
        indent: cli.indent,
        modules: cli.modules,
        headers: cli.headers,
    };

    let mut sink = emit::DirectiveSink::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    pipeline::generate(&doc, &options, &mut sink)
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;
    let written = sink.directives();
    sink.finish()
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!("wrote {} docstrings to {}", written, cli.output.display());
    Ok(())
}

/// Load the IR from a file, or from stdin for `None` and `-`.
fn read_documentation(input: Option<&Path>) -> Result<model::Documentation> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            model::Documentation::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        _ => model::Documentation::from_reader(io::stdin().lock())
            .context("failed to parse documentation from stdin"),
    }
}

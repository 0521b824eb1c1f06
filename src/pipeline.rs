//! Drives generation over every (module, header) unit in IR order.

use crate::emit::{DirectiveSink, ModuleEmitter};
use crate::error::Result;
use crate::format::DocumentFormatter;
use crate::links::LinkRewriter;
use crate::model::Documentation;
use log::info;
use std::io::Write;

/// First line of every generated artifact.
pub const ARTIFACT_BANNER: &str =
    "// Autogenerated docstrings file, extracted from C++ source documentation.";

/// Generation settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Fixed namespace; each module's own name when `None`.
    pub namespace: Option<String>,
    /// Sphinx role prefix for class links.
    pub role: String,
    /// Indentation of overload sub-sections.
    pub indent: usize,
    /// Only these modules, when non-empty.
    pub modules: Vec<String>,
    /// Only these headers, when non-empty.
    pub headers: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            namespace: None,
            role: ":py:class:".to_string(),
            indent: 2,
            modules: Vec::new(),
            headers: Vec::new(),
        }
    }
}

impl GenerateOptions {
    fn wants_module(&self, module: &str) -> bool {
        self.modules.is_empty() || self.modules.iter().any(|m| m == module)
    }

    fn wants_header(&self, header: &str) -> bool {
        self.headers.is_empty() || self.headers.iter().any(|h| h == header)
    }
}

/// Write the banner and all directives for `doc` into `sink`.
///
/// Modules and headers are visited exactly in the order supplied.
pub fn generate<W: Write>(
    doc: &Documentation,
    options: &GenerateOptions,
    sink: &mut DirectiveSink<W>,
) -> Result<()> {
    let known = doc.known_classes();
    let formatter = DocumentFormatter::new(LinkRewriter::new(&known, &options.role)?, options.indent);

    sink.write_line(ARTIFACT_BANNER)?;
    sink.write_line("")?;

    info!("Generating docstrings from intermediate representation...");
    for module in doc.modules.iter().filter(|m| options.wants_module(&m.name)) {
        info!("  {}", module.name);
        let namespace = options.namespace.as_deref().unwrap_or(&module.name);
        let emitter = ModuleEmitter::new(&formatter, namespace);
        for header in module.headers.iter().filter(|h| options.wants_header(&h.name)) {
            info!("    {}", header.name);
            emitter.emit(sink, &module.name, &header.name, &header.groups)?;
        }
    }
    Ok(())
}

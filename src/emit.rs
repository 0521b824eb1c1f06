//! SWIG directive output: the artifact sink and per-header emission.

use crate::error::Result;
use crate::format::DocumentFormatter;
use crate::group;
use crate::model::ClassDocGroup;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only writer for the generated interface file.
pub struct DirectiveSink<W: Write> {
    out: W,
    directives: usize,
}

impl DirectiveSink<BufWriter<File>> {
    /// Create (or truncate) the artifact at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> DirectiveSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, directives: 0 }
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Bind `body` to `target` with `%feature("docstring")`.
    pub fn write_directive(&mut self, target: &str, body: &str) -> Result<()> {
        write!(self.out, "%feature(\"docstring\")  {} \"\n{}\n\";\n\n", target, body)?;
        self.directives += 1;
        debug!("wrote docstring for {}", target);
        Ok(())
    }

    pub fn directives(&self) -> usize {
        self.directives
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Emits every directive of one (module, header) unit.
pub struct ModuleEmitter<'a> {
    formatter: &'a DocumentFormatter<'a>,
    namespace: &'a str,
}

impl<'a> ModuleEmitter<'a> {
    pub fn new(formatter: &'a DocumentFormatter<'a>, namespace: &'a str) -> Self {
        Self {
            formatter,
            namespace,
        }
    }

    pub fn emit<W: Write>(
        &self,
        sink: &mut DirectiveSink<W>,
        module: &str,
        header: &str,
        class_docs: &[ClassDocGroup],
    ) -> Result<()> {
        sink.write_line(&format!(
            "// Documentation extracted from: (module={}, header={})",
            module, header
        ))?;

        for grouped in group::group_all(class_docs)? {
            let class = grouped.class.as_deref();
            if let (Some(class), Some(parent)) = (class, grouped.parent.as_deref()) {
                debug!("class {} derives from {}", class, parent);
            }
            if let (Some(class), Some(comment)) = (class, grouped.comment.as_deref()) {
                let target = format!("{}::{}", self.namespace, class);
                sink.write_directive(&target, &self.formatter.class_body(comment))?;
            }

            for (name, bucket) in grouped.overloads.iter() {
                let Some(body) = self.formatter.function_body(name, bucket) else {
                    continue;
                };
                sink.write_directive(&self.qualify(class, name), &body)?;
            }
        }
        Ok(())
    }

    fn qualify(&self, class: Option<&str>, name: &str) -> String {
        match class {
            Some(class) => format!("{}::{}::{}", self.namespace, class, name),
            None => format!("{}::{}", self.namespace, name),
        }
    }
}

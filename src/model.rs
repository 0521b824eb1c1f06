//! Data model for the extracted documentation IR.
//!
//! Mirrors the JSON handed over by the C++ documentation extractor. Every
//! list keeps the order in which the extractor produced it.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

/// Complete IR: all modules plus the class names used for link resolution.
#[derive(Debug, Default, Deserialize)]
pub struct Documentation {
    #[serde(default)]
    pub classnames: Vec<String>,
    #[serde(default)]
    pub modules: Vec<ModuleDoc>,
}

/// One source module (a directory of headers).
#[derive(Debug, Default, Deserialize)]
pub struct ModuleDoc {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<HeaderDoc>,
}

/// One header file and the class/free-function scopes it defines.
#[derive(Debug, Default, Deserialize)]
pub struct HeaderDoc {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<ClassDocGroup>,
}

/// A class scope, or the free functions of a header when `class` is absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ClassDocGroup {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,
}

/// A raw signature paired with its comment. `None` means undocumented.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionDoc {
    pub signature: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[cfg(test)]
impl FunctionDoc {
    pub fn new(signature: &str, comment: Option<&str>) -> Self {
        Self {
            signature: signature.to_string(),
            comment: comment.map(str::to_string),
        }
    }
}

impl Documentation {
    /// Parse the IR from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The known class names as a lookup set.
    pub fn known_classes(&self) -> HashSet<String> {
        self.classnames.iter().cloned().collect()
    }
}

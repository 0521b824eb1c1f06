//! Overload grouping: collect documented functions by symbol name.
//!
//! Emission order must follow the header, so the first-seen order of names
//! is kept in its own list next to the buckets instead of relying on map
//! iteration order.

use crate::error::Result;
use crate::model::{ClassDocGroup, FunctionDoc};
use crate::signature;
use std::collections::HashMap;

/// A documented signature and its comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
    pub signature: String,
    pub comment: String,
}

/// Buckets of overloads keyed by symbol name, plus first-seen order.
#[derive(Debug, Default)]
pub struct OverloadSet {
    buckets: HashMap<String, Vec<Overload>>,
    order: Vec<String>,
}

impl OverloadSet {
    fn push(&mut self, name: String, overload: Overload) {
        match self.buckets.get_mut(&name) {
            Some(bucket) => bucket.push(overload),
            None => {
                self.order.push(name.clone());
                self.buckets.insert(name, vec![overload]);
            }
        }
    }

    /// Symbol names in the order they were first documented.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, name: &str) -> Option<&[Overload]> {
        self.buckets.get(name).map(Vec::as_slice)
    }

    /// Buckets in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Overload])> {
        self.order()
            .iter()
            .filter_map(move |name| self.get(name).map(|bucket| (name.as_str(), bucket)))
    }
}

/// A class scope after grouping.
#[derive(Debug)]
pub struct GroupedClass {
    pub class: Option<String>,
    pub parent: Option<String>,
    pub comment: Option<String>,
    pub overloads: OverloadSet,
}

/// Group one class scope. Undocumented functions are dropped before they
/// can claim a position in the order list.
pub fn group(class_doc: &ClassDocGroup) -> Result<GroupedClass> {
    Ok(GroupedClass {
        class: class_doc.class.clone(),
        parent: class_doc.parent.clone(),
        comment: class_doc.comment.clone(),
        overloads: group_functions(&class_doc.functions)?,
    })
}

/// Group every scope of one header, preserving scope order.
pub fn group_all(class_docs: &[ClassDocGroup]) -> Result<Vec<GroupedClass>> {
    class_docs.iter().map(group).collect()
}

fn group_functions(functions: &[FunctionDoc]) -> Result<OverloadSet> {
    let mut set = OverloadSet::default();
    for func in functions {
        let Some(ref comment) = func.comment else {
            continue;
        };
        let name = signature::symbol_name(&func.signature)?;
        set.push(
            name,
            Overload {
                signature: func.signature.clone(),
                comment: comment.clone(),
            },
        );
    }
    Ok(set)
}

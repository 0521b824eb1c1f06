//! Name and argument extraction from raw C++ signatures.
//!
//! Signatures look like `void set(const Mesh& mesh, double x) const`. Only
//! the part before the first `(` names the function and only the last
//! token of each parameter is kept.

use crate::error::{DocError, Result};

/// Derive the symbol name used to group overloads.
///
/// Conversion operators keep their `operator` prefix, so
/// `operator double()` yields `"operator double"` and never collides with
/// a function called `double`.
pub fn symbol_name(signature: &str) -> Result<String> {
    let head = signature.split('(').next().unwrap_or_default();
    let words: Vec<&str> = head.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(DocError::MalformedSignature(signature.to_string())),
        [.., "operator", last] => Ok(format!("operator {}", last)),
        [.., last] => Ok(last.to_string()),
    }
}

/// Argument names in declaration order, types discarded.
pub fn argument_names(signature: &str) -> Vec<String> {
    let (Some(open), Some(close)) = (signature.find('('), signature.rfind(')')) else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }
    let inner = signature[open + 1..close].trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .filter_map(|piece| piece.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_function() {
        assert_eq!(symbol_name("f(int a, double b)").unwrap(), "f");
        assert_eq!(argument_names("f(int a, double b)"), vec!["a", "b"]);
    }

    #[test]
    fn return_type_and_qualifiers() {
        let sig = "static const Mesh& mesh(const std::string& name) const";
        assert_eq!(symbol_name(sig).unwrap(), "mesh");
        assert_eq!(argument_names(sig), vec!["name"]);
    }

    #[test]
    fn conversion_operator() {
        assert_eq!(symbol_name("operator double()").unwrap(), "operator double");
        assert_eq!(symbol_name("double()").unwrap(), "double");
    }

    #[test]
    fn ordinary_operator() {
        assert_eq!(symbol_name("const Vertex& operator=(const Vertex& v)").unwrap(), "operator=");
    }

    #[test]
    fn no_arguments() {
        assert!(argument_names("index() const").is_empty());
        assert!(argument_names("tic(  )").is_empty());
    }

    #[test]
    fn empty_argument_piece_skipped() {
        assert_eq!(argument_names("f(int a, )"), vec!["a"]);
    }

    #[test]
    fn malformed_signature() {
        assert!(matches!(
            symbol_name("(int a)"),
            Err(DocError::MalformedSignature(_))
        ));
        assert!(symbol_name("   ").is_err());
    }
}

//! Docstring body formatting for classes and (possibly overloaded) functions.

use crate::group::Overload;
use crate::links::{escape_quotes, LinkRewriter};
use crate::signature;

/// First line of every overloaded function's docstring.
pub const OVERLOAD_BANNER: &str = "**Overloaded versions**";

/// Renders bodies with links resolved and quotes escaped exactly once.
pub struct DocumentFormatter<'a> {
    links: LinkRewriter<'a>,
    indent: usize,
}

impl<'a> DocumentFormatter<'a> {
    pub fn new(links: LinkRewriter<'a>, indent: usize) -> Self {
        Self { links, indent }
    }

    pub fn class_body(&self, comment: &str) -> String {
        escape_quotes(&self.links.rewrite(comment))
    }

    /// Body for one symbol name. `None` for an empty bucket.
    pub fn function_body(&self, name: &str, bucket: &[Overload]) -> Option<String> {
        let body = match bucket {
            [] => return None,
            [single] => self.links.rewrite(&single.comment),
            overloads => {
                let mut body = OVERLOAD_BANNER.to_string();
                for overload in overloads {
                    let args = signature::argument_names(&overload.signature);
                    let section = format!(
                        "\n\n* {}\\ **({})**\n\n{}",
                        name,
                        args.join(", "),
                        indent(&overload.comment, self.indent)
                    );
                    body.push_str(&self.links.rewrite(&section));
                }
                body
            }
        };
        Some(escape_quotes(&body))
    }
}

/// Prefix every line with `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn overload(signature: &str, comment: &str) -> Overload {
        Overload {
            signature: signature.to_string(),
            comment: comment.to_string(),
        }
    }

    fn with_formatter(f: impl FnOnce(&DocumentFormatter<'_>)) {
        let known: HashSet<String> = ["Mesh".to_string()].into_iter().collect();
        let formatter = DocumentFormatter::new(LinkRewriter::new(&known, ":py:class:").unwrap(), 2);
        f(&formatter);
    }

    #[test]
    fn class_body_links_and_escapes() {
        with_formatter(|fmt| {
            assert_eq!(
                fmt.class_body("A \"cell\" of a _Mesh_."),
                "A \\\"cell\\\" of a :py:class:`Mesh`."
            );
        });
    }

    #[test]
    fn single_overload_is_plain_comment() {
        with_formatter(|fmt| {
            let body = fmt
                .function_body("init", &[overload("void init(uint dim)", "Compute entities.")])
                .unwrap();
            assert_eq!(body, "Compute entities.");
        });
    }

    #[test]
    fn overloads_get_banner_and_sections() {
        with_formatter(|fmt| {
            let body = fmt
                .function_body(
                    "set",
                    &[
                        overload("void set(int x)", "Set int.\nSecond line."),
                        overload("void set(const Mesh& mesh, double x)", "Set from _Mesh_."),
                    ],
                )
                .unwrap();
            assert_eq!(
                body,
                "**Overloaded versions**\
                 \n\n* set\\ **(x)**\n\n  Set int.\n  Second line.\
                 \n\n* set\\ **(mesh, x)**\n\n  Set from :py:class:`Mesh`."
            );
        });
    }

    #[test]
    fn overload_sections_keep_bucket_order() {
        with_formatter(|fmt| {
            let body = fmt
                .function_body(
                    "f",
                    &[overload("f(double b)", "second"), overload("f(int a)", "first")],
                )
                .unwrap();
            let b = body.find("**(b)**").unwrap();
            let a = body.find("**(a)**").unwrap();
            assert!(b < a);
        });
    }

    #[test]
    fn identical_argument_names_are_accepted() {
        with_formatter(|fmt| {
            let body = fmt
                .function_body("g", &[overload("g(int x)", "one"), overload("g(double x)", "two")])
                .unwrap();
            assert_eq!(body.matches("* g\\ **(x)**").count(), 2);
        });
    }

    #[test]
    fn quotes_in_overloads_escaped_once() {
        with_formatter(|fmt| {
            let body = fmt
                .function_body(
                    "q",
                    &[overload("q()", "say \"a\""), overload("q(int n)", "already \\\"b\\\"")],
                )
                .unwrap();
            assert!(body.contains("say \\\"a\\\""));
            assert!(body.contains("already \\\"b\\\""));
            assert!(!body.contains("\\\\\""));
        });
    }

    #[test]
    fn empty_bucket_emits_nothing() {
        with_formatter(|fmt| assert!(fmt.function_body("none", &[]).is_none()));
    }

    #[test]
    fn indent_every_line() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
        assert_eq!(indent("a\n\nb", 4), "    a\n    \n    b");
    }
}

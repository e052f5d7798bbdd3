//! Textual post-processing of the rendered document.
//!
//! Pure text concatenation applied after the writer: generator identity
//! line, lint suppression, and the `@flow` pragma. No semantic content.

/// Prepends a `//` comment line to the document.
#[must_use]
pub fn prepend_comment(text: &str, document: &str) -> String {
    format!("// {text}\n{document}")
}

/// Prepends an eslint-disable block comment for the given rules.
#[must_use]
pub fn eslint_disable(rules: &[&str], document: &str) -> String {
    format!("/* eslint-disable {} */\n{}", rules.join(", "), document)
}

/// Applies the standard header stack: generator identity, then
/// `no-use-before-define` suppression, then the `@flow` pragma on top.
///
/// The generator version is an explicit parameter rather than read from
/// global state, so callers embed their own identity.
#[must_use]
pub fn standard_header(document: &str, version: &str) -> String {
    let document = prepend_comment(&format!("Generated by modelflow {version}"), document);
    let document = eslint_disable(&["no-use-before-define"], &document);
    prepend_comment("@flow", &document)
}

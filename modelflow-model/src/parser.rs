//! Java model source parser.
//!
//! This module extracts the structural shape of one Java source unit:
//! package, class name, superclass, and instance fields with their raw
//! type descriptors. Method bodies are skipped entirely; only declared
//! method names are retained for accessor verification.

use crate::error::ParseError;
use crate::types::{ClassModel, Field};

/// Java modifiers recognized in front of a member declaration.
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "transient",
    "volatile",
    "abstract",
    "synchronized",
    "native",
    "strictfp",
    "default",
];

/// Parses one Java source unit into a [`ClassModel`].
///
/// # Arguments
/// * `source` - Raw source text of the unit
/// * `unit` - Unit identifier (usually the file name) used in errors
///
/// # Errors
/// Returns `ParseError` if the unit contains no class declaration or the
/// class body is malformed.
pub fn parse_model(source: &str, unit: &str) -> Result<ClassModel, ParseError> {
    let text = strip_noise(source);
    let package = parse_package(&text);

    let decl = find_class_decl(&text).ok_or_else(|| ParseError::missing_class(unit))?;
    let body = balanced_block(&text, decl.body_open)
        .ok_or_else(|| ParseError::malformed(unit, "unterminated class body"))?;

    let mut model = ClassModel::new(package, decl.name);
    model.superclass = decl.superclass;
    parse_body(body, &mut model);

    Ok(model)
}

struct ClassDecl {
    name: String,
    superclass: Option<String>,
    /// Index of the opening `{` of the class body, relative to the
    /// stripped text.
    body_open: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Replaces comments and string/char literals with whitespace so that
/// later scanning never trips over braces or keywords inside them.
fn strip_noise(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' => match chars.peek() {
                Some('/') => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = ' ';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                    out.push(' ');
                }
                _ => out.push(c),
            },
            '"' | '\'' => {
                let quote = c;
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        chars.next();
                    } else if c == quote {
                        break;
                    }
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Extracts the package declaration, or an empty string if absent.
fn parse_package(text: &str) -> String {
    let Some(at) = find_keyword(text, "package") else {
        return String::new();
    };
    let rest = &text[at + "package".len()..];
    match rest.find(';') {
        Some(end) => rest[..end].trim().to_string(),
        None => String::new(),
    }
}

/// Finds a keyword at an identifier boundary.
fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(pos) = text[from..].find(keyword) {
        let at = from + pos;
        let before_ok = at == 0
            || text[..at]
                .chars()
                .next_back()
                .is_none_or(|c| !is_ident_char(c) && c != '.');
        let after = at + keyword.len();
        let after_ok = text[after..].chars().next().is_none_or(|c| !is_ident_char(c));
        if before_ok && after_ok {
            return Some(at);
        }
        from = at + keyword.len();
    }
    None
}

/// Locates the outermost class declaration and its `extends` clause.
fn find_class_decl(text: &str) -> Option<ClassDecl> {
    let at = find_keyword(text, "class")?;
    let rest = &text[at + "class".len()..];

    let mut chars = rest.char_indices();
    // Class name.
    let mut name = String::new();
    let mut cursor = 0;
    for (i, c) in chars.by_ref() {
        cursor = i;
        if c.is_whitespace() && name.is_empty() {
            continue;
        }
        if is_ident_char(c) {
            name.push(c);
        } else {
            break;
        }
    }
    if name.is_empty() {
        return None;
    }

    let body_open_rel = rest.find('{')?;
    let mut header = &rest[cursor..body_open_rel];

    // Skip the class's own type parameter list so that a bound like
    // `<T extends Number>` is not mistaken for the superclass clause.
    if header.trim_start().starts_with('<') {
        let mut depth = 0usize;
        for (i, c) in header.char_indices() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth -= 1;
                    if depth == 0 {
                        header = &header[i + 1..];
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    let superclass = find_keyword(header, "extends").map(|ext| {
        let tail = &header[ext + "extends".len()..];
        parse_type_reference(tail)
    });
    let superclass = superclass.filter(|s| !s.is_empty());

    Some(ClassDecl {
        name,
        superclass,
        body_open: at + "class".len() + body_open_rel,
    })
}

/// Reads a type reference (`com.example.Base<T>`) and reduces it to the
/// simple name with generic parameters stripped.
fn parse_type_reference(text: &str) -> String {
    let mut reference = String::new();
    for c in text.chars() {
        if c.is_whitespace() && reference.is_empty() {
            continue;
        }
        if is_ident_char(c) || c == '.' {
            reference.push(c);
        } else {
            break;
        }
    }
    reference
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Returns the text between the brace at `open` and its matching close.
fn balanced_block(text: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Walks top-level declarations of the class body, collecting instance
/// fields and declared method names.
fn parse_body(body: &str, model: &mut ClassModel) {
    let chars: Vec<char> = body.chars().collect();
    let mut stmt = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ';' => {
                handle_statement(&stmt, model);
                stmt.clear();
                i += 1;
            }
            '{' => {
                let end = match_brace(&chars, i);
                let header = strip_annotations(&stmt);
                if header.contains('=') {
                    // Array or anonymous-class initializer; the statement
                    // still ends at the next semicolon.
                } else {
                    if let Some(name) = method_name(&header) {
                        model.methods.push(name);
                    }
                    stmt.clear();
                }
                i = end + 1;
            }
            c => {
                stmt.push(c);
                i += 1;
            }
        }
    }
}

/// Index of the brace matching the one at `open` (or the last index on
/// malformed input).
fn match_brace(chars: &[char], open: usize) -> usize {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(open) {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    chars.len().saturating_sub(1)
}

/// Classifies one `;`-terminated member declaration.
fn handle_statement(stmt: &str, model: &mut ClassModel) {
    let cleaned = strip_annotations(stmt);
    let cleaned = cleaned.split('=').next().unwrap_or("").trim();
    if cleaned.is_empty() {
        return;
    }

    // A parenthesis before the terminator marks an abstract/native
    // method declaration.
    if cleaned.contains('(') {
        if let Some(name) = method_name(cleaned) {
            model.methods.push(name);
        }
        return;
    }

    let tokens = tokenize_member(cleaned);
    let mut iter = tokens.iter().peekable();

    let mut is_static = false;
    let mut is_transient = false;
    while iter.peek().is_some_and(|t| MODIFIERS.contains(&t.as_str())) {
        if let Some(modifier) = iter.next() {
            is_static |= modifier == "static";
            is_transient |= modifier == "transient";
        }
    }

    // Static and transient members are not part of the serialized model.
    if is_static || is_transient {
        return;
    }

    let Some(descriptor) = iter.next() else {
        return;
    };

    for token in iter {
        if token == "," {
            continue;
        }
        let (name, suffix) = match token.strip_suffix("[]") {
            Some(name) => (name, "[]"),
            None => (token.as_str(), ""),
        };
        if name.is_empty() {
            continue;
        }
        model
            .fields
            .push(Field::new(name, format!("{descriptor}{suffix}")));
    }
}

/// Tokenizes a member declaration, keeping generic argument lists
/// attached to their head token.
fn tokenize_member(stmt: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    let flush = |current: &mut String, tokens: &mut Vec<String>| {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    };

    for c in stmt.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                flush(&mut current, &mut tokens);
                tokens.push(",".to_string());
            }
            c if c.is_whitespace() && depth == 0 => flush(&mut current, &mut tokens),
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

/// Removes annotations (`@Name` or `@Name(...)`) from a declaration.
fn strip_annotations(stmt: &str) -> String {
    let mut out = String::with_capacity(stmt.len());
    let mut chars = stmt.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '@' {
            out.push(c);
            continue;
        }
        while chars.peek().is_some_and(|&c| is_ident_char(c) || c == '.') {
            chars.next();
        }
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        if chars.peek() == Some(&'(') {
            let mut depth = 0usize;
            for c in chars.by_ref() {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    out
}

/// Extracts a method name from a declaration header, if it is one.
fn method_name(header: &str) -> Option<String> {
    for keyword in ["class", "interface", "enum", "record"] {
        if find_keyword(header, keyword).is_some() {
            return None;
        }
    }

    let open = header.find('(')?;
    let name: String = header[..open]
        .chars()
        .rev()
        .skip_while(|c| c.is_whitespace())
        .take_while(|&c| is_ident_char(c))
        .collect();
    if name.is_empty() {
        return None;
    }
    Some(name.chars().rev().collect())
}

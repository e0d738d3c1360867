//! Selector matching for the declarative page contract
//!
//! Pages declare checkbox groups with selector strings
//! (`data-toggle-target`, `data-checkbox-group`). The supported subset is
//! what that contract uses: compound simple selectors (tag, `#id`,
//! `.class`, `[attr]`, `[attr=value]`, `:checked`) and comma-separated
//! lists. Combinators are rejected.

use super::node::Element;
use thiserror::Error;

/// Selector parse failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("combinators are not supported: {0:?}")]
    Combinator(String),
    #[error("unsupported pseudo-class: {0:?}")]
    UnsupportedPseudo(String),
    #[error("invalid selector syntax at {0:?}")]
    Syntax(String),
}

/// An attribute test within a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrTest {
    name: String,
    value: Option<String>,
}

/// One compound simple selector (no combinators)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
    checked: bool,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && !self.checked
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(ref tag) = self.tag {
            if el.tag.name() != tag {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if el.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        for test in &self.attrs {
            match (el.attr(&test.name), &test.value) {
                (None, _) => return false,
                (Some(_), None) => {}
                (Some(actual), Some(expected)) => {
                    if actual != expected {
                        return false;
                    }
                }
            }
        }
        if self.checked && !el.checked {
            return false;
        }
        true
    }
}

/// A parsed selector list (comma-separated compounds)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    parts: Vec<Compound>,
}

impl SelectorList {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parts = Vec::new();
        for part in input.split(',') {
            parts.push(parse_compound(part.trim())?);
        }
        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { parts })
    }

    /// Whether any compound in the list matches the element
    pub fn matches(&self, el: &Element) -> bool {
        self.parts.iter().any(|p| p.matches(el))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    if input.is_empty() {
        return Err(SelectorError::Empty);
    }
    if input.contains(char::is_whitespace)
        || input.contains('>')
        || input.contains('+')
        || input.contains('~')
    {
        return Err(SelectorError::Combinator(input.to_string()));
    }

    let mut compound = Compound::default();
    let mut chars = input.chars().peekable();

    // Optional leading tag name
    if chars.peek().is_some_and(|&c| is_ident_char(c) && c != '-') {
        compound.tag = Some(take_ident(&mut chars));
    }

    while let Some(&c) = chars.peek() {
        match c {
            '#' => {
                chars.next();
                let ident = take_ident(&mut chars);
                if ident.is_empty() {
                    return Err(SelectorError::Syntax(input.to_string()));
                }
                compound.id = Some(ident);
            }
            '.' => {
                chars.next();
                let ident = take_ident(&mut chars);
                if ident.is_empty() {
                    return Err(SelectorError::Syntax(input.to_string()));
                }
                compound.classes.push(ident);
            }
            '[' => {
                chars.next();
                let name = take_ident(&mut chars);
                if name.is_empty() {
                    return Err(SelectorError::Syntax(input.to_string()));
                }
                let value = match chars.peek() {
                    Some('=') => {
                        chars.next();
                        Some(take_attr_value(&mut chars, input)?)
                    }
                    _ => None,
                };
                if chars.next() != Some(']') {
                    return Err(SelectorError::Syntax(input.to_string()));
                }
                compound.attrs.push(AttrTest { name, value });
            }
            ':' => {
                chars.next();
                let pseudo = take_ident(&mut chars);
                if pseudo == "checked" {
                    compound.checked = true;
                } else {
                    return Err(SelectorError::UnsupportedPseudo(pseudo));
                }
            }
            _ => return Err(SelectorError::Syntax(input.to_string())),
        }
    }

    if compound.is_empty() {
        return Err(SelectorError::Empty);
    }
    Ok(compound)
}

fn take_attr_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    input: &str,
) -> Result<String, SelectorError> {
    match chars.peek() {
        Some(&quote @ ('"' | '\'')) => {
            chars.next();
            let mut value = String::new();
            for c in chars.by_ref() {
                if c == quote {
                    return Ok(value);
                }
                value.push(c);
            }
            Err(SelectorError::Syntax(input.to_string()))
        }
        _ => {
            let mut value = String::new();
            while let Some(&c) = chars.peek() {
                if c == ']' {
                    break;
                }
                value.push(c);
                chars.next();
            }
            Ok(value)
        }
    }
}

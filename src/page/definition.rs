//! Declarative page definitions
//!
//! Pages arrive as JSON documents describing an element tree with
//! classes and `data-*` attributes, and are instantiated into a fresh
//! `Document` on every navigation. Instantiating anew is what clears
//! per-page state such as the `data-submitting` flag.

use super::document::Document;
use super::node::{Element, NodeId, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Page definition problems
#[derive(Debug, Error)]
pub enum PageError {
    #[error("unknown tag {0:?}")]
    UnknownTag(String),
    #[error("unknown page {0:?}")]
    UnknownPage(String),
}

/// One element in a page definition
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ElementDef {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementDef>,
}

/// A named page definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDef {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

impl PageDef {
    /// Build a fresh document from this definition
    pub fn instantiate(&self) -> Result<Document, PageError> {
        let mut doc = Document::new();
        let root = doc.root();
        for def in &self.elements {
            append_def(&mut doc, root, def)?;
        }
        Ok(doc)
    }

    /// Built-in demo page: a small user-maintenance screen exercising
    /// every widget the guard layer covers
    pub fn demo() -> Self {
        let json = include_str!("demo_page.json");
        // Shipped with the binary; validity is covered by the tests below.
        serde_json::from_str(json).expect("built-in demo page is valid JSON")
    }
}

fn append_def(doc: &mut Document, parent: NodeId, def: &ElementDef) -> Result<NodeId, PageError> {
    let tag = Tag::parse(&def.tag).ok_or_else(|| PageError::UnknownTag(def.tag.clone()))?;
    let mut element = Element::new(tag);
    element.id = def.id.clone();
    element.classes = def.classes.clone();
    element.attrs = def.attrs.clone();
    element.text = def.text.clone();
    element.value = def.value.clone();
    element.checked = def.checked;
    element.disabled = def.disabled;
    element.href = def.href.clone();

    let id = doc.append(parent, element);
    for child in &def.children {
        append_def(doc, id, child)?;
    }
    Ok(id)
}

/// In-memory registry of page definitions, keyed by page name
#[derive(Debug, Clone)]
pub struct PageStore {
    pages: HashMap<String, PageDef>,
}

impl PageStore {
    /// Store containing only the built-in demo page
    pub fn builtin() -> Self {
        let demo = PageDef::demo();
        let mut pages = HashMap::new();
        pages.insert(demo.name.clone(), demo);
        Self { pages }
    }

    /// Load `*.json` page definitions from a directory on top of the
    /// built-in pages. Unreadable or invalid files are skipped with a
    /// warning.
    pub fn load_dir(dir: &Path) -> Self {
        let mut store = Self::builtin();
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot read pages directory {}: {err}", dir.display());
                return store;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    warn!("cannot read page file {}: {err}", path.display());
                    continue;
                }
            };
            match serde_json::from_str::<PageDef>(&content) {
                Ok(def) => {
                    store.pages.insert(def.name.clone(), def);
                }
                Err(err) => {
                    warn!("invalid page definition {}: {err}", path.display());
                }
            }
        }
        store
    }

    /// Look up a page definition by name
    pub fn get(&self, name: &str) -> Option<&PageDef> {
        self.pages.get(name)
    }

    /// Instantiate a page by name
    pub fn instantiate(&self, name: &str) -> Result<(String, Document), PageError> {
        let def = self
            .get(name)
            .ok_or_else(|| PageError::UnknownPage(name.to_string()))?;
        Ok((def.title.clone(), def.instantiate()?))
    }

    /// Names of all known pages, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SelectorList;

    #[test]
    fn test_demo_page_parses() {
        let demo = PageDef::demo();
        assert_eq!(demo.name, "demo");
        assert!(!demo.elements.is_empty());
    }

    #[test]
    fn test_demo_page_instantiates() {
        let doc = PageDef::demo().instantiate().unwrap();
        assert!(!doc.all_elements().is_empty());
    }

    #[test]
    fn test_demo_page_declares_checkbox_group() {
        let doc = PageDef::demo().instantiate().unwrap();
        let toggle = SelectorList::parse("[data-toggle-target]").unwrap();
        let gated = SelectorList::parse("[data-button-enable]").unwrap();
        assert_eq!(doc.query_all(&toggle).len(), 1);
        assert!(!doc.query_all(&gated).is_empty());
    }

    #[test]
    fn test_instantiate_builds_tree() {
        let def = PageDef {
            name: "p".to_string(),
            title: "P".to_string(),
            elements: vec![ElementDef {
                tag: "form".to_string(),
                id: Some("f".to_string()),
                children: vec![ElementDef {
                    tag: "input".to_string(),
                    attrs: HashMap::from([("type".to_string(), "submit".to_string())]),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };
        let doc = def.instantiate().unwrap();
        let form = doc.find_by_id("f").unwrap();
        assert_eq!(doc.children(form).len(), 1);
        let submit = doc.children(form)[0];
        assert!(doc.element(submit).is_submit_control());
    }

    #[test]
    fn test_instantiate_rejects_unknown_tag() {
        let def = PageDef {
            name: "p".to_string(),
            title: String::new(),
            elements: vec![ElementDef {
                tag: "marquee".to_string(),
                ..Default::default()
            }],
        };
        assert!(matches!(def.instantiate(), Err(PageError::UnknownTag(_))));
    }

    #[test]
    fn test_definition_deserializes_with_defaults() {
        let json = r#"{"name": "x", "elements": [{"tag": "label", "text": "hi"}]}"#;
        let def: PageDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "x");
        assert_eq!(def.elements[0].text, "hi");
        assert!(!def.elements[0].checked);
    }

    mod page_store {
        use super::*;

        #[test]
        fn test_builtin_contains_demo() {
            let store = PageStore::builtin();
            assert!(store.get("demo").is_some());
            assert_eq!(store.names(), vec!["demo"]);
        }

        #[test]
        fn test_instantiate_unknown_page_is_error() {
            let store = PageStore::builtin();
            assert!(matches!(
                store.instantiate("missing"),
                Err(PageError::UnknownPage(_))
            ));
        }

        #[test]
        fn test_load_dir_missing_directory_falls_back_to_builtin() {
            let store = PageStore::load_dir(Path::new("/nonexistent/formdeck-pages"));
            assert!(store.get("demo").is_some());
        }
    }
}

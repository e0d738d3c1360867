//! Arena-backed element tree with ancestor and selector queries

use super::node::{Element, NodeId, Tag};
use super::selector::SelectorList;

/// Tree node: an element plus its links
#[derive(Debug, Clone)]
pub struct Node {
    pub element: Element,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// An instantiated page: the element tree the guard layer operates on
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document with an empty root container
    pub fn new() -> Self {
        let root = Node {
            element: Element::new(Tag::Div),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append an element under the given parent, returning its id
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id].element
    }

    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id].element
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// All descendants of a node in document (preorder) order,
    /// excluding the node itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.nodes[n].children.iter().rev().copied());
        }
        out
    }

    /// Every element in the document in document order
    pub fn all_elements(&self) -> Vec<NodeId> {
        self.descendants(self.root)
    }

    /// Walk from a node up through its ancestors and return the first
    /// one satisfying the predicate (the `closest()` analog)
    pub fn closest<F>(&self, from: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        let mut current = Some(from);
        while let Some(id) = current {
            if pred(self.element(id)) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// The enclosing form of a node, if any (the node itself counts)
    pub fn closest_form(&self, from: NodeId) -> Option<NodeId> {
        self.closest(from, |el| el.tag == Tag::Form)
    }

    /// All elements matching the selector list, in document order
    pub fn query_all(&self, selector: &SelectorList) -> Vec<NodeId> {
        self.all_elements()
            .into_iter()
            .filter(|&id| selector.matches(&self.nodes[id].element))
            .collect()
    }

    /// Find an element by its id attribute
    #[allow(dead_code)]
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.all_elements()
            .into_iter()
            .find(|&n| self.nodes[n].element.id.as_deref() == Some(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small fixture: root > form > (input, button), root > a
    fn build_doc() -> (Document, NodeId, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), Element::new(Tag::Form));
        let input = doc.append(form, Element::new(Tag::Input));
        let button = doc.append(form, Element::new(Tag::Button));
        let link = doc.append(doc.root(), Element::new(Tag::Link));
        (doc, form, input, button, link)
    }

    #[test]
    fn test_append_links_parent_and_children() {
        let (doc, form, input, button, _link) = build_doc();
        assert_eq!(doc.parent(input), Some(form));
        assert_eq!(doc.parent(form), Some(doc.root()));
        assert_eq!(doc.children(form), &[input, button]);
    }

    #[test]
    fn test_descendants_preorder() {
        let (doc, form, input, button, link) = build_doc();
        assert_eq!(doc.descendants(doc.root()), vec![form, input, button, link]);
        assert_eq!(doc.descendants(form), vec![input, button]);
        assert!(doc.descendants(link).is_empty());
    }

    #[test]
    fn test_closest_includes_self() {
        let (doc, form, _input, button, _link) = build_doc();
        let found = doc.closest(button, |el| el.tag == Tag::Button);
        assert_eq!(found, Some(button));
        let found = doc.closest(button, |el| el.tag == Tag::Form);
        assert_eq!(found, Some(form));
    }

    #[test]
    fn test_closest_returns_none_when_no_match() {
        let (doc, _form, input, _button, _link) = build_doc();
        assert!(doc.closest(input, |el| el.tag == Tag::Textarea).is_none());
    }

    #[test]
    fn test_closest_form() {
        let (doc, form, input, _button, link) = build_doc();
        assert_eq!(doc.closest_form(input), Some(form));
        assert_eq!(doc.closest_form(form), Some(form));
        assert!(doc.closest_form(link).is_none());
    }

    #[test]
    fn test_query_all_in_document_order() {
        let (mut doc, _form, input, button, link) = build_doc();
        doc.element_mut(input).add_class("hot");
        doc.element_mut(button).add_class("hot");
        doc.element_mut(link).add_class("hot");

        let list = SelectorList::parse(".hot").unwrap();
        assert_eq!(doc.query_all(&list), vec![input, button, link]);
    }

    #[test]
    fn test_find_by_id() {
        let (mut doc, _form, input, _button, _link) = build_doc();
        doc.element_mut(input).id = Some("name".to_string());
        assert_eq!(doc.find_by_id("name"), Some(input));
        assert!(doc.find_by_id("missing").is_none());
    }
}

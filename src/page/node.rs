//! Page element definitions

use std::collections::HashMap;

/// Index of a node within its document arena
pub type NodeId = usize;

/// Element tag, mirroring the markup vocabulary of page definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Form,
    Button,
    Input,
    Textarea,
    Link,
    Label,
    Div,
}

impl Tag {
    /// Tag name as written in page definitions and selectors
    pub fn name(self) -> &'static str {
        match self {
            Tag::Form => "form",
            Tag::Button => "button",
            Tag::Input => "input",
            Tag::Textarea => "textarea",
            Tag::Link => "a",
            Tag::Label => "label",
            Tag::Div => "div",
        }
    }

    /// Parse a tag name from a page definition
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "form" => Some(Tag::Form),
            "button" => Some(Tag::Button),
            "input" => Some(Tag::Input),
            "textarea" => Some(Tag::Textarea),
            "a" => Some(Tag::Link),
            "label" => Some(Tag::Label),
            "div" => Some(Tag::Div),
            _ => None,
        }
    }
}

/// Input control kind, derived from the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Checkbox,
    Submit,
    Button,
}

/// A single page element: tag, identity, declarative attributes, and
/// widget state
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    /// Display text (label text, button caption, link text)
    pub text: String,
    /// Current value of a text input or textarea
    pub value: String,
    /// Checked state of a checkbox
    pub checked: bool,
    /// Native disabled flag of a button/input/textarea
    pub disabled: bool,
    /// Link target of an `a` element
    pub href: Option<String>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            value: String::new(),
            checked: false,
            disabled: false,
            href: None,
        }
    }

    /// Check whether the element carries a class
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class if not already present
    pub fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute value
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Input kind for `input` elements (defaults to `text`, as in markup)
    pub fn input_type(&self) -> InputType {
        match self.attr("type") {
            Some("password") => InputType::Password,
            Some("checkbox") => InputType::Checkbox,
            Some("submit") => InputType::Submit,
            Some("button") => InputType::Button,
            _ => InputType::Text,
        }
    }

    /// Button kind for `button` elements (defaults to `submit`, as in markup)
    pub fn button_type(&self) -> &str {
        self.attr("type").unwrap_or("submit")
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == Tag::Input && self.input_type() == InputType::Checkbox
    }

    /// A control whose activation submits its enclosing form
    pub fn is_submit_control(&self) -> bool {
        match self.tag {
            Tag::Button => self.button_type() == "submit",
            Tag::Input => self.input_type() == InputType::Submit,
            _ => false,
        }
    }

    /// Eligible for click-triggered disabling: matches the
    /// `button, input[type=submit], a` ancestor search
    pub fn is_actionable(&self) -> bool {
        match self.tag {
            Tag::Button | Tag::Link => true,
            Tag::Input => self.input_type() == InputType::Submit,
            _ => false,
        }
    }

    /// Focus is editing text here, so Backspace must keep working
    pub fn is_editable(&self) -> bool {
        match self.tag {
            Tag::Textarea => true,
            Tag::Input => matches!(self.input_type(), InputType::Text | InputType::Password),
            _ => self.attr("contenteditable").is_some(),
        }
    }

    /// Can receive focus in the TUI
    pub fn is_interactive(&self) -> bool {
        matches!(self.tag, Tag::Button | Tag::Input | Tag::Textarea | Tag::Link)
    }

    /// Inert for focus, activation and hit-testing. Buttons and inputs
    /// use the native flag; disabled links carry the `disabled` class.
    pub fn is_disabled(&self) -> bool {
        if self.tag == Tag::Link {
            self.has_class("disabled")
        } else {
            self.disabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tag {
        use super::*;

        #[test]
        fn test_parse_known_tags() {
            assert_eq!(Tag::parse("form"), Some(Tag::Form));
            assert_eq!(Tag::parse("button"), Some(Tag::Button));
            assert_eq!(Tag::parse("input"), Some(Tag::Input));
            assert_eq!(Tag::parse("textarea"), Some(Tag::Textarea));
            assert_eq!(Tag::parse("a"), Some(Tag::Link));
            assert_eq!(Tag::parse("label"), Some(Tag::Label));
            assert_eq!(Tag::parse("div"), Some(Tag::Div));
        }

        #[test]
        fn test_parse_unknown_tag() {
            assert_eq!(Tag::parse("table"), None);
        }

        #[test]
        fn test_name_round_trips() {
            for tag in [
                Tag::Form,
                Tag::Button,
                Tag::Input,
                Tag::Textarea,
                Tag::Link,
                Tag::Label,
                Tag::Div,
            ] {
                assert_eq!(Tag::parse(tag.name()), Some(tag));
            }
        }
    }

    mod element {
        use super::*;

        #[test]
        fn test_classes() {
            let mut el = Element::new(Tag::Button);
            assert!(!el.has_class("non_disabled"));
            el.add_class("non_disabled");
            assert!(el.has_class("non_disabled"));
            el.add_class("non_disabled");
            assert_eq!(el.classes.len(), 1);
        }

        #[test]
        fn test_attrs() {
            let mut el = Element::new(Tag::Input);
            assert!(el.attr("data-toggle-target").is_none());
            el.set_attr("data-toggle-target", ".row-check");
            assert_eq!(el.attr("data-toggle-target"), Some(".row-check"));
        }

        #[test]
        fn test_input_type_defaults_to_text() {
            let el = Element::new(Tag::Input);
            assert_eq!(el.input_type(), InputType::Text);
        }

        #[test]
        fn test_button_defaults_to_submit() {
            let el = Element::new(Tag::Button);
            assert!(el.is_submit_control());
        }

        #[test]
        fn test_button_with_type_button_is_not_submit() {
            let mut el = Element::new(Tag::Button);
            el.set_attr("type", "button");
            assert!(!el.is_submit_control());
            assert!(el.is_actionable());
        }

        #[test]
        fn test_submit_input_is_submit_control() {
            let mut el = Element::new(Tag::Input);
            el.set_attr("type", "submit");
            assert!(el.is_submit_control());
            assert!(el.is_actionable());
        }

        #[test]
        fn test_text_input_is_not_actionable() {
            let el = Element::new(Tag::Input);
            assert!(!el.is_actionable());
        }

        #[test]
        fn test_link_is_actionable() {
            let el = Element::new(Tag::Link);
            assert!(el.is_actionable());
            assert!(!el.is_submit_control());
        }

        #[test]
        fn test_editable_elements() {
            assert!(Element::new(Tag::Textarea).is_editable());
            assert!(Element::new(Tag::Input).is_editable());

            let mut checkbox = Element::new(Tag::Input);
            checkbox.set_attr("type", "checkbox");
            assert!(!checkbox.is_editable());

            let mut div = Element::new(Tag::Div);
            assert!(!div.is_editable());
            div.set_attr("contenteditable", "true");
            assert!(div.is_editable());
        }

        #[test]
        fn test_disabled_link_uses_class() {
            let mut link = Element::new(Tag::Link);
            assert!(!link.is_disabled());
            link.add_class("disabled");
            assert!(link.is_disabled());
        }

        #[test]
        fn test_disabled_button_uses_native_flag() {
            let mut button = Element::new(Tag::Button);
            assert!(!button.is_disabled());
            button.disabled = true;
            assert!(button.is_disabled());
        }
    }
}

//! Element tree produced by widget render functions.
//!
//! Widgets never patch a previous tree: every state change projects a fresh
//! `ViewNode` tree which replaces the mount point's children wholesale.

use std::fmt::Write as _;

/// Elements that have no closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br"];

/// One element of a rendered widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewNode {
    pub tag: &'static str,
    pub classes: Vec<String>,
    /// Attributes in insertion order. Boolean attributes carry an empty value.
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Adds a boolean attribute (`disabled`, `draggable`...) when `condition` holds.
    pub fn flag(self, condition: bool, name: impl Into<String>) -> Self {
        if condition {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the `data-key` attribute used to route host events.
    pub fn key(&self) -> Option<&str> {
        self.attribute("data-key")
    }

    /// Depth-first search for the node carrying `data-key == key`.
    pub fn find_by_key(&self, key: &str) -> Option<&ViewNode> {
        if self.key() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_key(key))
    }

    /// Depth-first search for every node with `class`.
    pub fn find_all_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a ViewNode>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.find_all_by_class(class, out);
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {}", name);
            } else {
                let _ = write!(out, " {}=\"{}\"", name, escape(value));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

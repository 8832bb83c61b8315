//! A framework-neutral tree of rendered elements.
//!
//! Components render into a [`Node`]. A host can walk the tree to build its
//! own elements, or use the [`Display`](std::fmt::Display) implementation to
//! produce HTML.
use crate::{Classes, Id};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use std::fmt;

/// The element type of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<div>`
    Div,
    /// `<span>`
    Span,
    /// `<a>`
    Anchor,
    /// `<button>`
    Button,
    /// `<h6>`
    Heading,
    /// `<hr>`
    Rule,
    /// Any other element.
    Custom(SmolStr),
}

impl Tag {
    /// Returns the name of the element.
    pub fn name(&self) -> &str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Anchor => "a",
            Tag::Button => "button",
            Tag::Heading => "h6",
            Tag::Rule => "hr",
            Tag::Custom(name) => name,
        }
    }

    fn is_void(&self) -> bool {
        matches!(self, Tag::Rule)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "div" => Tag::Div,
            "span" => Tag::Span,
            "a" => Tag::Anchor,
            "button" => Tag::Button,
            "h6" => Tag::Heading,
            "hr" => Tag::Rule,
            _ => Tag::Custom(SmolStr::new(name)),
        }
    }
}

/// A child of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A nested element.
    Node(Node),
    /// Plain text.
    Text(SmolStr),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(SmolStr::new(text))
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(SmolStr::from(text))
    }
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Tag,
    id: Option<Id>,
    classes: Classes,
    attributes: FxHashMap<SmolStr, SmolStr>,
    children: Vec<Child>,
}

impl Node {
    /// Creates an empty [`Node`] with the given [`Tag`].
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Classes::new(),
            attributes: FxHashMap::default(),
            children: Vec::new(),
        }
    }

    /// Sets the [`Id`] of the [`Node`].
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the [`Classes`] of the [`Node`].
    pub fn classes(mut self, classes: Classes) -> Self {
        self.classes = classes;
        self
    }

    /// Sets an attribute of the [`Node`].
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a [`Child`] to the [`Node`].
    pub fn push(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child in `children`.
    pub fn extend(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the [`Tag`] of the [`Node`].
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the [`Id`] of the [`Node`], if any.
    pub fn element_id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Returns the [`Classes`] of the [`Node`].
    pub fn class_list(&self) -> &Classes {
        &self.classes
    }

    /// Returns the value of an attribute, if set.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(SmolStr::as_str)
    }

    /// Returns the children of the [`Node`].
    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.tag.name();

        write!(f, "<{name}")?;

        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", Escaped(&id.to_string()))?;
        }

        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", Escaped(&self.classes.to_string()))?;
        }

        // Attribute order must not depend on the hasher
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (key, value) in attributes {
            write!(f, " {key}=\"{}\"", Escaped(value))?;
        }

        if self.tag.is_void() {
            return f.write_str(">");
        }

        f.write_str(">")?;

        for child in &self.children {
            match child {
                Child::Node(node) => fmt::Display::fmt(node, f)?,
                Child::Text(text) => fmt::Display::fmt(&Escaped(text), f)?,
            }
        }

        write!(f, "</{name}>")
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }

        Ok(())
    }
}

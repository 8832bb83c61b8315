//! The brand of a navbar, usually a logo or the name of the application.
use crate::core::{Child, Classes, Node, Prefix, SmolStr, Tag};

/// The brand of a navbar.
///
/// Renders as a link when an `href` is set, and as a `<span>` otherwise,
/// unless an explicit [`Tag`] is given.
#[derive(Debug, Clone, Default)]
pub struct NavbarBrand {
    prefix: Option<SmolStr>,
    href: Option<SmolStr>,
    tag: Option<Tag>,
    class: Classes,
    attributes: Vec<(SmolStr, SmolStr)>,
    children: Vec<Child>,
}

impl NavbarBrand {
    /// Creates an empty [`NavbarBrand`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom class prefix, replacing `navbar-brand`.
    pub fn prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the link target of the [`NavbarBrand`].
    pub fn href(mut self, href: impl Into<SmolStr>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the [`Tag`] of the rendered element.
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Adds extra classes to the rendered element.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.class.push(class);
        self
    }

    /// Sets an extra attribute on the rendered element, like `aria-label`.
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child to the [`NavbarBrand`].
    pub fn push(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the [`Tag`] the [`NavbarBrand`] renders as.
    pub fn element(&self) -> Tag {
        match (&self.tag, &self.href) {
            (Some(tag), _) => tag.clone(),
            (None, Some(_)) => Tag::Anchor,
            (None, None) => Tag::Span,
        }
    }

    /// Renders the [`NavbarBrand`].
    pub fn view(&self) -> Node {
        let prefix = Prefix::resolve(self.prefix.as_deref(), Prefix::NAVBAR_BRAND);

        let mut node = Node::new(self.element())
            .classes(self.class.clone().with(prefix.as_str()))
            .extend(self.children.iter().cloned());

        for (name, value) in &self.attributes {
            node = node.attribute(name.clone(), value.clone());
        }

        match &self.href {
            Some(href) => node.attribute("href", href.clone()),
            None => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_without_href() {
        let brand = NavbarBrand::new().push("icy");

        assert_eq!(
            brand.view().to_string(),
            "<span class=\"navbar-brand\">icy</span>"
        );
    }

    #[test]
    fn test_anchor_with_href() {
        let brand = NavbarBrand::new().href("/").class("me-2").push("icy");

        assert_eq!(brand.element(), Tag::Anchor);
        assert_eq!(
            brand.view().to_string(),
            "<a class=\"me-2 navbar-brand\" href=\"/\">icy</a>"
        );
    }

    #[test]
    fn test_explicit_tag_wins() {
        let brand = NavbarBrand::new().href("/").tag("h1").prefix("brand");

        assert_eq!(brand.element().name(), "h1");
        assert_eq!(
            brand.view().to_string(),
            "<h1 class=\"brand\" href=\"/\"></h1>"
        );
    }

    #[test]
    fn test_extra_attributes() {
        let brand = NavbarBrand::new()
            .href("/")
            .attribute("title", "Home")
            .attribute("aria-label", "icy");

        assert_eq!(brand.view().get_attribute("title"), Some("Home"));
        assert_eq!(
            brand.view().to_string(),
            "<a class=\"navbar-brand\" aria-label=\"icy\" href=\"/\" title=\"Home\"></a>"
        );
    }
}

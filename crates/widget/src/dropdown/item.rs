use crate::core::{Classes, Fault, Interaction, Node, Prefix, SmolStr, Tag};
use crate::selection::Ambient;

/// A selectable entry of a dropdown menu.
#[derive(Debug, Clone)]
pub struct Item<K> {
    key: K,
    label: SmolStr,
    prefix: Option<SmolStr>,
    href: Option<SmolStr>,
    tag: Option<Tag>,
    active: bool,
    disabled: bool,
}

impl<K> Item<K> {
    /// Creates a new [`Item`] with the given key and label.
    pub fn new(key: K, label: impl Into<SmolStr>) -> Self {
        Self {
            key,
            label: label.into(),
            prefix: None,
            href: None,
            tag: None,
            active: false,
            disabled: false,
        }
    }

    /// Sets a custom class prefix, replacing `dropdown-item`.
    pub fn prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the link target of the [`Item`].
    pub fn href(mut self, href: impl Into<SmolStr>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the [`Tag`] of the rendered element.
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Marks the [`Item`] as the current one.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Disables the [`Item`].
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the key of the [`Item`].
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns `true` if the [`Item`] is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Reports the selection of this [`Item`] to its enclosing dropdown.
    ///
    /// Returns `Ok(false)` without reporting anything if the [`Item`] is
    /// disabled.
    pub fn activate(
        &self,
        ambient: &Ambient<'_, K>,
        interaction: &Interaction,
    ) -> Result<bool, Fault> {
        if self.disabled {
            log::debug!("ignoring activation of disabled item {}", self.label);
            return Ok(false);
        }

        ambient.notify(&self.key, interaction).map(|()| true)
    }

    /// Renders the [`Item`].
    pub fn view(&self) -> Node {
        let prefix = Prefix::resolve(self.prefix.as_deref(), Prefix::DROPDOWN_ITEM);
        let tag = self.tag.clone().unwrap_or(Tag::Anchor);
        let is_button = tag == Tag::Button;

        let mut node = Node::new(tag)
            .classes(
                Classes::new()
                    .with(prefix.as_str())
                    .with_if(self.active, "active")
                    .with_if(self.disabled, "disabled"),
            )
            .push(self.label.as_str());

        if let Some(href) = &self.href {
            node = node.attribute("href", href.clone());
        }

        if self.disabled {
            node = node
                .attribute("aria-disabled", "true")
                .attribute("tabindex", "-1");

            if is_button {
                node = node.attribute("disabled", "");
            }
        }

        node
    }
}

/// A non-interactive heading inside a dropdown menu.
#[derive(Debug, Clone)]
pub struct Header {
    label: SmolStr,
    prefix: Option<SmolStr>,
}

impl Header {
    /// Creates a new [`Header`].
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            prefix: None,
        }
    }

    /// Sets a custom class prefix, replacing `dropdown-header`.
    pub fn prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Renders the [`Header`].
    pub fn view(&self) -> Node {
        let prefix = Prefix::resolve(self.prefix.as_deref(), Prefix::DROPDOWN_HEADER);

        Node::new(Tag::Div)
            .classes(Classes::from(prefix.as_str()))
            .attribute("role", "heading")
            .push(self.label.as_str())
    }
}

/// A separator between groups of dropdown items.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    prefix: Option<SmolStr>,
}

impl Divider {
    /// Creates a new [`Divider`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom class prefix, replacing `dropdown-divider`.
    pub fn prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Renders the [`Divider`].
    pub fn view(&self) -> Node {
        let prefix = Prefix::resolve(self.prefix.as_deref(), Prefix::DROPDOWN_DIVIDER);

        Node::new(Tag::Div)
            .classes(Classes::from(prefix.as_str()))
            .attribute("role", "separator")
    }
}

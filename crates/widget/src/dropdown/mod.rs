//! Dropdowns toggle a menu of selectable items.
//!
//! # Example
//! ```
//! use icy_strap_widget::core::Interaction;
//! use icy_strap_widget::dropdown::{Direction, Dropdown, Item};
//! use icy_strap_widget::Ownership;
//!
//! let mut dropdown = Dropdown::new(Ownership::Owned(false))
//!     .direction(Direction::Up)
//!     .on_select(|key: &&str, _: &Interaction| {
//!         println!("selected {key}");
//!         Ok(())
//!     });
//!
//! let _ = dropdown.toggle(&Interaction::click("toggle"))?;
//! assert!(dropdown.is_open());
//!
//! let item = Item::new("copy", "Copy");
//! let _ = item.activate(&dropdown.scope(), &Interaction::click("copy"))?;
//! assert!(!dropdown.is_open());
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```
mod item;

pub use item::{Divider, Header, Item};

use crate::core::{
    Child, Classes, Id, Interaction, Metadata, Node, Outcome, Prefix, Result, SmolStr, Tag,
};
use crate::disclosure::{Disclosure, Ownership};
use crate::selection::{Ambient, Relay};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The direction a [`Dropdown`] menu opens towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Below the toggle.
    #[default]
    Down,
    /// Above the toggle.
    Up,
    /// To the left of the toggle.
    Left,
    /// To the right of the toggle.
    Right,
}

/// A toggle with a menu of selectable items.
pub struct Dropdown<'a, K> {
    id: Option<Id>,
    prefix: Option<SmolStr>,
    direction: Option<Direction>,
    align_end: bool,
    class: Classes,
    attributes: Vec<(SmolStr, SmolStr)>,
    tag: Tag,
    relay: Rc<RefCell<Relay<'a, K>>>,
}

impl<'a, K: 'a> Dropdown<'a, K> {
    /// Creates a new [`Dropdown`] with the given [`Ownership`] of its open
    /// state.
    pub fn new(ownership: Ownership<'a>) -> Self {
        Self {
            id: None,
            prefix: None,
            direction: None,
            align_end: false,
            class: Classes::new(),
            attributes: Vec::new(),
            tag: Tag::Div,
            relay: Rc::new(RefCell::new(Relay::new(Disclosure::new(ownership)))),
        }
    }

    /// Sets the [`Id`] of the [`Dropdown`].
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a custom class prefix, replacing `dropdown`.
    pub fn prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the [`Direction`] of the menu.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Aligns the menu to the end of the toggle.
    ///
    /// The flag is read by the overlay layer of the host when it places the
    /// menu; see [`Dropdown::is_align_end`].
    pub fn align_end(mut self, align_end: bool) -> Self {
        self.align_end = align_end;
        self
    }

    /// Adds extra classes to the rendered element.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.class.push(class);
        self
    }

    /// Sets an attribute of the rendered element, like `aria-label` or
    /// `data-*`.
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the [`Tag`] of the rendered element.
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the listener notified when an item is selected.
    pub fn on_select(self, on_select: impl FnMut(&K, &Interaction) -> Outcome + 'a) -> Self {
        self.relay.borrow_mut().set_on_select(on_select);
        self
    }

    /// Sets the listener notified of every requested visibility change.
    ///
    /// Only used when the [`Dropdown`] owns its state; a delegated state
    /// reports to its own setter.
    pub fn on_toggle(self, on_toggle: impl FnMut(bool, &Interaction, Metadata) + 'a) -> Self {
        self.relay
            .borrow_mut()
            .disclosure_mut()
            .set_on_toggle(on_toggle);
        self
    }

    /// Nests the [`Dropdown`] inside the component that created `ambient`.
    ///
    /// Selections made in this [`Dropdown`] are reported to `ambient` before
    /// the local listener.
    pub fn within(self, ambient: Ambient<'a, K>) -> Self {
        self.relay.borrow_mut().set_ambient(ambient);
        self
    }

    /// Returns the [`Ambient`] listener for the items of this [`Dropdown`].
    pub fn scope(&self) -> Ambient<'a, K> {
        Relay::share(&self.relay)
    }

    /// Returns the resolved class [`Prefix`].
    pub fn resolved_prefix(&self) -> Prefix {
        Prefix::resolve(self.prefix.as_deref(), Prefix::DROPDOWN)
    }

    /// Returns the selector matching the enabled items of the menu.
    pub fn item_selector(&self) -> String {
        self.resolved_prefix().item_selector()
    }

    /// Returns whether the menu is aligned to the end of the toggle.
    ///
    /// The [`Dropdown`] does not position its menu; the overlay layer of the
    /// host consumes this flag.
    pub fn is_align_end(&self) -> bool {
        self.align_end
    }

    /// Returns the [`Direction`] of the menu.
    pub fn menu_direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.relay.borrow().disclosure().is_open()
    }

    /// Requests the menu to open or close.
    ///
    /// See [`Disclosure::request_toggle`].
    pub fn request_toggle(
        &mut self,
        next_open: bool,
        interaction: &Interaction,
    ) -> Result<Metadata> {
        self.relay
            .borrow_mut()
            .disclosure_mut()
            .request_toggle(next_open, interaction, None)
    }

    /// Flips the menu in response to an interaction with the toggle.
    pub fn toggle(&mut self, interaction: &Interaction) -> Result<Metadata> {
        let next_open = !self.is_open();

        self.request_toggle(next_open, interaction)
    }

    /// Selects the item with the given key, closing the menu.
    ///
    /// See [`Relay::relay`].
    pub fn select(&mut self, key: &K, interaction: &Interaction) -> Result<Metadata> {
        self.relay.borrow_mut().relay(key, interaction)
    }

    /// Returns the classes of the rendered element.
    pub fn classes(&self) -> Classes {
        let prefix = self.resolved_prefix();
        let direction = self.direction;

        self.class
            .clone()
            .with_if(self.is_open(), "show")
            .with_if(
                matches!(direction, None | Some(Direction::Down)),
                prefix.as_str(),
            )
            .with_if(direction == Some(Direction::Up), "dropup")
            .with_if(direction == Some(Direction::Right), "dropright")
            .with_if(direction == Some(Direction::Left), "dropleft")
    }

    /// Renders the [`Dropdown`] around the given children.
    pub fn view(&self, children: impl IntoIterator<Item = Child>) -> Node {
        let mut node = Node::new(self.tag.clone()).classes(self.classes());

        if let Some(id) = &self.id {
            node = node.id(id.clone());
        }

        for (name, value) in &self.attributes {
            node = node.attribute(name.clone(), value.clone());
        }

        node.extend(children)
    }
}

impl<K> fmt::Debug for Dropdown<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.id)
            .field("prefix", &self.prefix)
            .field("direction", &self.direction)
            .field("align_end", &self.align_end)
            .field("attributes", &self.attributes)
            .field("relay", &self.relay.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, Kind, Origin, Scope, Source};

    use std::cell::Cell;

    type Journal = Rc<RefCell<Vec<String>>>;

    #[derive(Debug, thiserror::Error)]
    #[error("broken listener")]
    struct Broken;

    fn journaled<'a>(journal: &Journal, ownership: Ownership<'a>) -> Dropdown<'a, String> {
        let toggles = Rc::clone(journal);
        let selections = Rc::clone(journal);

        Dropdown::new(ownership)
            .on_toggle(move |open, _, metadata: Metadata| {
                let entry = format!("toggle {open} {}", metadata.source);
                toggles.borrow_mut().push(entry);
            })
            .on_select(move |key: &String, _| {
                selections.borrow_mut().push(format!("local {key}"));
                Ok(())
            })
    }

    fn ambient(journal: &Journal) -> Ambient<'static, String> {
        let journal = Rc::clone(journal);

        Ambient::new(move |key: &String, _: &Interaction| {
            journal.borrow_mut().push(format!("ambient {key}"));
            Ok(())
        })
    }

    #[test]
    fn test_default_classes() {
        let dropdown = Dropdown::<u32>::new(Ownership::Owned(false)).class("nav-item");

        assert_eq!(dropdown.classes().to_string(), "nav-item dropdown");
        assert_eq!(
            dropdown.view([]).to_string(),
            "<div class=\"nav-item dropdown\"></div>"
        );
    }

    #[test]
    fn test_direction_classes() {
        let classes = |direction: Direction| {
            Dropdown::<u32>::new(Ownership::Owned(true))
                .direction(direction)
                .classes()
                .to_string()
        };

        assert_eq!(classes(Direction::Down), "show dropdown");
        assert_eq!(classes(Direction::Up), "show dropup");
        assert_eq!(classes(Direction::Right), "show dropright");
        assert_eq!(classes(Direction::Left), "show dropleft");
    }

    #[test]
    fn test_custom_prefix() {
        let dropdown = Dropdown::<u32>::new(Ownership::Owned(false)).prefix("menu");

        assert_eq!(dropdown.classes().to_string(), "menu");
        assert_eq!(
            dropdown.item_selector(),
            ".menu-item:not(.disabled):not(:disabled)"
        );
    }

    #[test]
    fn test_toggle_flips_owned_state() {
        let mut dropdown = Dropdown::<u32>::new(Ownership::Owned(false));

        let opened = dropdown.toggle(&Interaction::click("toggle")).unwrap();
        assert_eq!(opened.source, Source::Click);
        assert!(dropdown.is_open());

        let closed = dropdown.toggle(&Interaction::outside_click()).unwrap();
        assert_eq!(closed.source, Source::RootClose);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_delegated_classes_follow_owner() {
        let open = Cell::new(false);
        let mut dropdown = Dropdown::<u32>::new(Ownership::delegated(
            || open.get(),
            |next, _: &Interaction, _| open.set(next),
        ));

        assert!(!dropdown.classes().contains("show"));

        let _ = dropdown.toggle(&Interaction::key_down("toggle")).unwrap();

        assert!(dropdown.classes().contains("show"));
    }

    #[test]
    fn test_nested_dropdown_reports_to_parent() {
        let parent_selections = Cell::new(0);
        let parent = Dropdown::<u32>::new(Ownership::Owned(true)).on_select(|_, _| {
            parent_selections.set(parent_selections.get() + 1);
            Ok(())
        });

        let mut child = Dropdown::new(Ownership::Owned(true)).within(parent.scope());

        let metadata = child.select(&4, &Interaction::click("item")).unwrap();

        assert_eq!(metadata.source, Source::Select);
        assert!(!child.is_open());
        assert!(!parent.is_open());
        assert_eq!(parent_selections.get(), 1);
    }

    #[test]
    fn test_extra_attributes() {
        let dropdown = Dropdown::<u32>::new(Ownership::Owned(false))
            .id("actions")
            .attribute("aria-label", "Actions");

        assert_eq!(
            dropdown.view([]).to_string(),
            "<div id=\"actions\" class=\"dropdown\" aria-label=\"Actions\"></div>"
        );
    }

    #[test]
    fn test_click_opens_closed_dropdown() {
        let journal = Journal::default();
        let mut dropdown = journaled(&journal, Ownership::Owned(false));

        let interaction = Interaction::click("toggle");
        let metadata = dropdown.request_toggle(true, &interaction).unwrap();

        assert_eq!(metadata.source, Source::Click);
        assert!(dropdown.is_open());
        assert_eq!(*journal.borrow(), ["toggle true click"]);
    }

    #[test]
    fn test_outside_click_reports_root_close() {
        let journal = Journal::default();
        let mut dropdown = journaled(&journal, Ownership::Owned(true));

        let interaction = Interaction::outside_click();
        let metadata = dropdown.request_toggle(false, &interaction).unwrap();

        assert_eq!(metadata.source, Source::RootClose);
        assert!(!dropdown.is_open());
        assert_eq!(*journal.borrow(), ["toggle false rootClose"]);
    }

    #[test]
    fn test_selection_notifies_ambient_then_local_then_closes() {
        let journal = Journal::default();
        let scope = ambient(&journal);
        let mut dropdown = journaled(&journal, Ownership::Owned(true)).within(scope);

        let key = String::from("item-2");
        let interaction = Interaction::click("item-2");
        let metadata = dropdown.select(&key, &interaction).unwrap();

        assert_eq!(metadata.source, Source::Select);
        assert!(!dropdown.is_open());
        assert_eq!(
            *journal.borrow(),
            ["ambient item-2", "local item-2", "toggle false select"]
        );
    }

    #[test]
    fn test_selection_without_listeners_still_closes() {
        let closes = RefCell::new(Vec::new());
        let mut dropdown = Dropdown::<u32>::new(Ownership::Owned(true))
            .on_toggle(|open, _, metadata| closes.borrow_mut().push((open, metadata.source)));

        let _ = dropdown.select(&2, &Interaction::click("item-2")).unwrap();

        assert_eq!(*closes.borrow(), [(false, Source::Select)]);
    }

    #[test]
    fn test_source_follows_kind_unless_from_root() {
        let cases = [
            (Kind::Click, Origin::Element("toggle".into()), Source::Click),
            (Kind::KeyDown, Origin::Element("toggle".into()), Source::Keydown),
            (Kind::Click, Origin::Root, Source::RootClose),
            (Kind::KeyDown, Origin::Root, Source::RootClose),
        ];

        for (kind, origin, expected) in cases {
            let mut dropdown = Dropdown::<u32>::new(Ownership::Owned(false));

            let interaction = Interaction::new(kind, origin);
            let metadata = dropdown.request_toggle(true, &interaction).unwrap();

            assert_eq!(metadata.source, expected);
        }
    }

    #[test]
    fn test_repeated_open_requests_are_all_reported() {
        let journal = Journal::default();
        let mut dropdown = journaled(&journal, Ownership::Owned(true));

        for _ in 0..2 {
            let interaction = Interaction::click("toggle");
            let _ = dropdown.request_toggle(true, &interaction).unwrap();
        }

        assert_eq!(*journal.borrow(), ["toggle true click", "toggle true click"]);
    }

    #[test]
    fn test_delegated_state_is_only_reported() {
        let requests = RefCell::new(Vec::new());
        let ownership = Ownership::delegated(
            || false,
            |open, _: &Interaction, metadata: Metadata| {
                requests.borrow_mut().push((open, metadata.source));
            },
        );
        let mut dropdown = Dropdown::<u32>::new(ownership);

        let _ = dropdown.toggle(&Interaction::click("toggle")).unwrap();
        let _ = dropdown.toggle(&Interaction::click("toggle")).unwrap();

        assert!(!dropdown.is_open());
        assert_eq!(
            *requests.borrow(),
            [(true, Source::Click), (true, Source::Click)]
        );
    }

    #[test]
    fn test_listener_fault_is_returned_after_close() {
        let mut dropdown = Dropdown::<u32>::new(Ownership::Owned(true))
            .on_select(|_, _| Err(Box::new(Broken)));

        let interaction = Interaction::click("item");
        let error = dropdown.select(&1, &interaction).unwrap_err();

        assert!(matches!(
            error,
            Error::Listener {
                scope: Scope::Local,
                ..
            }
        ));
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("broken listener"));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_items_select_through_their_dropdown() {
        let journal = Journal::default();
        let dropdown = journaled(&journal, Ownership::Owned(true));
        let scope = dropdown.scope();

        let copy = Item::new("copy".to_owned(), "Copy");
        let paste = Item::new("paste".to_owned(), "Paste").disabled(true);

        let tap = Interaction::click("paste");
        assert!(!paste.activate(&scope, &tap).unwrap());
        assert!(dropdown.is_open());

        let tap = Interaction::click("copy");
        assert!(copy.activate(&scope, &tap).unwrap());
        assert!(!dropdown.is_open());
        assert_eq!(*journal.borrow(), ["local copy", "toggle false select"]);
    }

    #[test]
    fn test_align_end_does_not_change_classes() {
        let dropdown = Dropdown::<u32>::new(Ownership::Owned(false)).align_end(true);

        assert!(dropdown.is_align_end());
        assert_eq!(dropdown.classes().to_string(), "dropdown");
    }
}

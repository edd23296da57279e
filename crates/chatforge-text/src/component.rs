//! The component tree.
//!
//! A [`Component`] is a cheap-to-clone handle to an immutable node. Every
//! "modifying" method returns a new component; subtrees that did not change
//! are shared with the original through reference counting. Children never
//! point back at their parent, so the tree cannot contain cycles.

use std::sync::Arc;

use crate::{ClickEvent, Decoration, HoverEvent, ShowEntity, Style, TextColor};

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// What a component displays. Exactly one kind per node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// Literal text.
    Text(String),

    /// A translation key, resolved by the client, with ordered arguments
    /// substituted into its placeholders.
    Translatable { key: String, args: Vec<Component> },

    /// A score holder's value in a scoreboard objective. When `value` is
    /// set it is displayed instead of the live score.
    Score {
        name: String,
        objective: String,
        value: Option<String>,
    },

    /// The names of the entities matched by a selector pattern (`@p`, `@a[...]`).
    Selector(String),

    /// The key currently bound to a control (`key.jump`).
    Keybind(String),
}

impl Content {
    /// The text this content renders as when no client-side resolution is
    /// available: the literal text, the translation key, the explicit score
    /// value (or nothing), the selector pattern, or the keybind name.
    pub fn fallback_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Translatable { key, .. } => key,
            Self::Score { value, .. } => value.as_deref().unwrap_or(""),
            Self::Selector(pattern) => pattern,
            Self::Keybind(key) => key,
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct Node {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

/// An immutable node of styled text.
///
/// Equality and hashing are structural: two separately built trees with
/// the same shape compare equal. Use [`Component::ptr_eq`] for identity.
///
/// ```rust
/// use chatforge_text::{Component, NamedColor};
///
/// let greeting = Component::text("Hello, ")
///     .color(NamedColor::Gold)
///     .append(Component::text("world").bold(true));
///
/// assert_eq!(greeting.plain_text(), "Hello, world");
/// assert_eq!(greeting.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Component(Arc<Node>);

impl Component {
    /// Creates a component with the given content, no style, and no children.
    pub fn new(content: Content) -> Self {
        Self(Arc::new(Node {
            content,
            ..Node::default()
        }))
    }

    /// Creates a component from all of its parts.
    pub fn from_parts(content: Content, style: Style, children: Vec<Component>) -> Self {
        Self(Arc::new(Node {
            content,
            style,
            children,
        }))
    }

    /// An empty text component.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    pub fn translatable(key: impl Into<String>, args: impl Into<Vec<Component>>) -> Self {
        Self::new(Content::Translatable {
            key: key.into(),
            args: args.into(),
        })
    }

    pub fn score(
        name: impl Into<String>,
        objective: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::new(Content::Score {
            name: name.into(),
            objective: objective.into(),
            value,
        })
    }

    pub fn selector(pattern: impl Into<String>) -> Self {
        Self::new(Content::Selector(pattern.into()))
    }

    pub fn keybind(key: impl Into<String>) -> Self {
        Self::new(Content::Keybind(key.into()))
    }

    // -- Accessors --

    pub fn content(&self) -> &Content {
        &self.0.content
    }

    pub fn style(&self) -> &Style {
        &self.0.style
    }

    pub fn children(&self) -> &[Component] {
        &self.0.children
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// A key identifying this node for as long as it is alive. Two live
    /// handles return the same key exactly when [`Component::ptr_eq`] holds.
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Total number of nodes in this tree, counting translation arguments,
    /// hover text, and hovered entity names.
    pub fn node_count(&self) -> usize {
        let args: usize = match self.content() {
            Content::Translatable { args, .. } => args.iter().map(Component::node_count).sum(),
            _ => 0,
        };
        let hover = match &self.style().hover_event {
            Some(HoverEvent::ShowText(text)) => text.node_count(),
            Some(HoverEvent::ShowEntity(ShowEntity {
                name: Some(name), ..
            })) => name.node_count(),
            _ => 0,
        };
        let children: usize = self.children().iter().map(Component::node_count).sum();
        1 + args + hover + children
    }

    // -- Builders --
    //
    // These consume the handle and copy the node only if it is shared.

    fn edit(mut self, f: impl FnOnce(&mut Node)) -> Self {
        f(Arc::make_mut(&mut self.0));
        self
    }

    /// Replaces the whole style.
    pub fn with_style(self, style: Style) -> Self {
        self.edit(|node| node.style = style)
    }

    /// Replaces the content, keeping style and children.
    pub fn with_content(self, content: Content) -> Self {
        self.edit(|node| node.content = content)
    }

    /// Replaces the children.
    pub fn with_children(self, children: Vec<Component>) -> Self {
        self.edit(|node| node.children = children)
    }

    /// Adds a child after the existing ones.
    pub fn append(self, child: impl Into<Component>) -> Self {
        let child = child.into();
        self.edit(|node| node.children.push(child))
    }

    pub fn color(self, color: impl Into<TextColor>) -> Self {
        let color = color.into();
        self.edit(|node| node.style.color = Some(color))
    }

    pub fn decoration(self, decoration: Decoration, state: bool) -> Self {
        self.edit(|node| node.style.set_decoration(decoration, Some(state)))
    }

    pub fn bold(self, state: bool) -> Self {
        self.decoration(Decoration::Bold, state)
    }

    pub fn italic(self, state: bool) -> Self {
        self.decoration(Decoration::Italic, state)
    }

    pub fn underlined(self, state: bool) -> Self {
        self.decoration(Decoration::Underlined, state)
    }

    pub fn strikethrough(self, state: bool) -> Self {
        self.decoration(Decoration::Strikethrough, state)
    }

    pub fn obfuscated(self, state: bool) -> Self {
        self.decoration(Decoration::Obfuscated, state)
    }

    pub fn font(self, font: impl Into<String>) -> Self {
        let font = font.into();
        self.edit(|node| node.style.font = Some(font))
    }

    pub fn click_event(self, event: ClickEvent) -> Self {
        self.edit(|node| node.style.click_event = Some(event))
    }

    pub fn hover_event(self, event: HoverEvent) -> Self {
        self.edit(|node| node.style.hover_event = Some(event))
    }

    pub fn insertion(self, insertion: impl Into<String>) -> Self {
        let insertion = insertion.into();
        self.edit(|node| node.style.insertion = Some(insertion))
    }

    /// Rebuilds the tree bottom-up, applying `f` to every node's style.
    ///
    /// Translation arguments, hover text, hovered entity names, and children
    /// are visited. Nodes whose style and descendants come back unchanged
    /// are reused rather than copied.
    pub fn map_styles(&self, f: &mut impl FnMut(&Style) -> Style) -> Component {
        let content = match self.content() {
            Content::Translatable { key, args } => {
                let mapped: Vec<Component> = args.iter().map(|arg| arg.map_styles(f)).collect();
                Content::Translatable {
                    key: key.clone(),
                    args: mapped,
                }
            }
            other => other.clone(),
        };

        let mut style = f(self.style());
        let hover = match &style.hover_event {
            Some(HoverEvent::ShowText(text)) => Some(HoverEvent::ShowText(text.map_styles(f))),
            Some(HoverEvent::ShowEntity(entity @ ShowEntity { name: Some(name), .. })) => {
                Some(HoverEvent::ShowEntity(ShowEntity {
                    name: Some(name.map_styles(f)),
                    ..entity.clone()
                }))
            }
            _ => None,
        };
        if hover.is_some() {
            style.hover_event = hover;
        }

        let children: Vec<Component> =
            self.children().iter().map(|child| child.map_styles(f)).collect();

        let unchanged = content == *self.content()
            && style == *self.style()
            && children
                .iter()
                .zip(self.children())
                .all(|(new, old)| new.ptr_eq(old));
        if unchanged {
            return self.clone();
        }
        Component::from_parts(content, style, children)
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}

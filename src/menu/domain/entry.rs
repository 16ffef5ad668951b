//! Menu entries and the host menu tree.

use serde::{Deserialize, Serialize};

use super::MenuCommand;

/// Entry contributed by the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Entry identifier, unique within a menu.
    pub id: String,
    /// Displayed label.
    pub label: String,
    /// Action run when the entry is selected.
    pub command: MenuCommand,
}

impl MenuEntry {
    /// Creates a menu entry.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, command: MenuCommand) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            command,
        }
    }
}

/// One node of a host context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuNode {
    /// Entry owned by the host; opaque to the overlay.
    Item {
        /// Host entry identifier.
        id: String,
        /// Host entry label.
        label: String,
    },
    /// Named group of nodes.
    Group {
        /// Group identifier.
        id: String,
        /// Nodes inside the group.
        children: Vec<MenuNode>,
    },
    /// Entry contributed by the overlay.
    Overlay(MenuEntry),
}

impl MenuNode {
    /// Creates a host item node.
    #[must_use]
    pub fn item(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Item {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Creates a group node.
    #[must_use]
    pub fn group(id: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Group {
            id: id.into(),
            children,
        }
    }

    /// Identifier of the node.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Item { id, .. } | Self::Group { id, .. } => id,
            Self::Overlay(entry) => &entry.id,
        }
    }
}

/// Context menu built by the host for one message.
///
/// The overlay only ever appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMenu {
    nodes: Vec<MenuNode>,
}

impl ContextMenu {
    /// Wraps the host's top-level nodes.
    #[must_use]
    pub const fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Overlay entries anywhere in the tree, depth first.
    #[must_use]
    pub fn overlay_entries(&self) -> Vec<&MenuEntry> {
        let mut found = Vec::new();
        collect_overlay_entries(&self.nodes, &mut found);
        found
    }

    /// Appends entries next to the anchor, or at the top level.
    ///
    /// The target is, searching depth first:
    /// 1. the children of a group whose id equals `anchor_id`;
    /// 2. the node list that contains an item whose id equals `anchor_id`;
    /// 3. the top-level list when the anchor is absent.
    ///
    /// Existing nodes are never reordered.
    pub fn append_entries(&mut self, anchor_id: &str, entries: Vec<MenuEntry>) {
        let mut nodes: Vec<MenuNode> = entries.into_iter().map(MenuNode::Overlay).collect();
        if !append_at_anchor(&mut self.nodes, anchor_id, &mut nodes) {
            self.nodes.append(&mut nodes);
        }
    }
}

impl From<Vec<MenuNode>> for ContextMenu {
    fn from(nodes: Vec<MenuNode>) -> Self {
        Self::new(nodes)
    }
}

fn append_at_anchor(
    nodes: &mut Vec<MenuNode>,
    anchor_id: &str,
    pending: &mut Vec<MenuNode>,
) -> bool {
    for node in nodes.iter_mut() {
        if let MenuNode::Group { id, children } = node
            && id.as_str() == anchor_id
        {
            children.append(pending);
            return true;
        }
    }

    if nodes
        .iter()
        .any(|node| !matches!(node, MenuNode::Group { .. }) && node.id() == anchor_id)
    {
        nodes.append(pending);
        return true;
    }

    nodes.iter_mut().any(|node| match node {
        MenuNode::Group { children, .. } => append_at_anchor(children, anchor_id, pending),
        MenuNode::Item { .. } | MenuNode::Overlay(_) => false,
    })
}

fn collect_overlay_entries<'a>(nodes: &'a [MenuNode], found: &mut Vec<&'a MenuEntry>) {
    for node in nodes {
        match node {
            MenuNode::Overlay(entry) => found.push(entry),
            MenuNode::Group { children, .. } => collect_overlay_entries(children, found),
            MenuNode::Item { .. } => {}
        }
    }
}

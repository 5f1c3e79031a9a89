//! Palette categories and the stack-shaped builder that fills them.
//!
//! ```ignore
//! let mut root = CategoryBuilder::new();
//! root.step_in(CategoryName::Control)
//!     .node(NodeKind::If)
//!     .node(NodeKind::While)
//!     .step_out();
//! let items = root.build().items;
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{AvailableNode, Metadata, NodeKind};

/// One palette entry: either a nested category or a leaf node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Category(Category),
    Node(AvailableNode),
}

impl Item {
    pub fn label(&self) -> &str {
        match self {
            Item::Category(category) => &category.metadata.label,
            Item::Node(node) => &node.metadata.label,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Item::Category(category) => Some(category),
            Item::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&AvailableNode> {
        match self {
            Item::Node(node) => Some(node),
            Item::Category(_) => None,
        }
    }
}

impl From<Category> for Item {
    fn from(category: Category) -> Self {
        Item::Category(category)
    }
}

impl From<AvailableNode> for Item {
    fn from(node: AvailableNode) -> Self {
        Item::Node(node)
    }
}

/// A named group of palette entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub metadata: Metadata,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(metadata: Metadata, items: Vec<Item>) -> Self {
        Self { metadata, items }
    }

    pub fn label(&self) -> &str {
        &self.metadata.label
    }

    /// Direct sub-category with the given label.
    pub fn category(&self, label: &str) -> Option<&Category> {
        self.items
            .iter()
            .filter_map(Item::as_category)
            .find(|category| category.label() == label)
    }

    /// Kinds of the direct leaf nodes, in order.
    pub fn node_kinds(&self) -> Vec<NodeKind> {
        self.items
            .iter()
            .filter_map(Item::as_node)
            .map(AvailableNode::kind)
            .collect()
    }
}

/// Fixed category names used by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryName {
    Root,
    Connections,
    Statement,
    Control,
    ErrorHandling,
    Concurrency,
}

impl CategoryName {
    pub fn label(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Connections => "Connections",
            Self::Statement => "Statement",
            Self::Control => "Control",
            Self::ErrorHandling => "Error Handling",
            Self::Concurrency => "Concurrency",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Root => "The topmost category",
            Self::Connections => "The connections used in the flow",
            Self::Statement => "Fundamental executable units in a program",
            Self::Control => "Allows execution of different blocks of code based on conditions",
            Self::ErrorHandling => "Handles errors that occur during execution",
            Self::Concurrency => "Enables the execution of multiple strands concurrently",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Root => &[],
            Self::Connections => &["Connection", "Client", "Endpoint"],
            Self::Statement => &["Statement", "Variable", "Assignment"],
            Self::Control => &["Control", "Loop", "Condition", "Branch"],
            Self::ErrorHandling => &["Error", "Fail", "Panic"],
            Self::Concurrency => &["Concurrency", "Transaction", "Lock", "Strand"],
        }
    }

    fn metadata(self) -> Metadata {
        Metadata::new(self.label())
            .with_description(self.description())
            .with_keywords(self.keywords().iter().copied())
    }
}

#[derive(Debug)]
struct Frame {
    name: CategoryName,
    children: IndexMap<CategoryName, Frame>,
    items: Vec<Item>,
}

impl Frame {
    fn new(name: CategoryName) -> Self {
        Self {
            name,
            children: IndexMap::new(),
            items: Vec::new(),
        }
    }

    /// Children first (insertion order, empty ones dropped), then own items.
    fn into_category(self) -> Category {
        let mut items: Vec<Item> = self
            .children
            .into_values()
            .map(Frame::into_category)
            .filter(|category| !category.items.is_empty())
            .map(Item::Category)
            .collect();
        items.extend(self.items);
        Category::new(self.name.metadata(), items)
    }
}

/// Stack-shaped accumulator rooted at [`CategoryName::Root`].
///
/// `step_in` descends into a named child of the current category, creating it
/// on first use; stepping into an existing child appends to it. Every
/// `step_in` must be matched by a `step_out` before `build`. Misuse panics:
/// it is a programming error, not a runtime condition.
#[derive(Debug)]
pub struct CategoryBuilder {
    root: Frame,
    /// Names from the root to the current category
    path: Vec<CategoryName>,
}

impl Default for CategoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            root: Frame::new(CategoryName::Root),
            path: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Frame {
        let mut frame = &mut self.root;
        for name in &self.path {
            frame = &mut frame.children[name];
        }
        frame
    }

    /// Descend into `name`, creating it if absent.
    pub fn step_in(&mut self, name: CategoryName) -> &mut Self {
        self.current()
            .children
            .entry(name)
            .or_insert_with(|| Frame::new(name));
        self.path.push(name);
        self
    }

    /// Return to the parent category.
    pub fn step_out(&mut self) -> &mut Self {
        assert!(
            self.path.pop().is_some(),
            "step_out called on the root category"
        );
        self
    }

    /// Append a default entry for `kind`.
    pub fn node(&mut self, kind: NodeKind) -> &mut Self {
        self.available_node(AvailableNode::from_kind(kind))
    }

    /// Append a fully custom entry.
    pub fn available_node(&mut self, node: AvailableNode) -> &mut Self {
        self.current().items.push(Item::Node(node));
        self
    }

    /// Append prebuilt items.
    pub fn items(&mut self, items: impl IntoIterator<Item = Item>) -> &mut Self {
        self.current().items.extend(items);
        self
    }

    /// Finish and return the root category.
    pub fn build(self) -> Category {
        assert!(
            self.path.is_empty(),
            "unbalanced step_in: {:?} still open",
            self.path
        );
        self.root.into_category()
    }
}

//! Append-only expression tree
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other through
//! `NodeId` handles. Index 0 is always the root, which never holds an
//! expression. The parser only ever appends under the root, but nodes can
//! be nested with `add_under`, and the membership search walks the whole
//! tree breadth-first either way.
//!
//! # Performance
//! - Add: O(1) amortised
//! - Contains: O(n) where n = number of nodes

use std::collections::{HashSet, VecDeque};
use std::fmt;
use thiserror::Error;

use crate::core::types::Expression;

/// Handle to a node inside one `ExpressionTree`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree errors
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// Handle does not refer to a node of this tree
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
}

/// What a node carries
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Root,
    Expression(Expression),
}

/// One arena slot
#[derive(Clone, Debug)]
pub struct Node {
    /// Back-reference only, never followed by the search
    parent: Option<NodeId>,
    kind: NodeKind,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The wrapped expression (`None` for the root)
    pub fn expression(&self) -> Option<&Expression> {
        match &self.kind {
            NodeKind::Root => None,
            NodeKind::Expression(expression) => Some(expression),
        }
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

const ROOT: NodeId = NodeId(0);

/// Holds every recognized expression of a script
#[derive(Clone, Debug)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
}

impl ExpressionTree {
    /// Creates a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                kind: NodeKind::Root,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Appends an expression as the last child of the root.
    ///
    /// No deduplication: adding an equal expression twice stores it twice.
    pub fn add(&mut self, expression: Expression) -> NodeId {
        self.attach(ROOT, expression)
    }

    /// Appends an expression as the last child of `parent`.
    pub fn add_under(
        &mut self,
        parent: NodeId,
        expression: Expression,
    ) -> Result<NodeId, TreeError> {
        if self.node(parent).is_none() {
            return Err(TreeError::UnknownNode(parent));
        }

        Ok(self.attach(parent, expression))
    }

    fn attach(&mut self, parent: NodeId, expression: Expression) -> NodeId {
        let id = NodeId(self.nodes.len());

        self.nodes.push(Node {
            parent: Some(parent),
            kind: NodeKind::Expression(expression),
            children: Vec::new(),
        });

        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }

        id
    }

    /// Checks whether any node holds an expression equal to `expression`.
    ///
    /// Breadth-first from the root with a visited set. Equality is the
    /// expression's own (see [`Expression`]), not identity or position.
    pub fn contains(&self, expression: &Expression) -> bool {
        let mut visited = HashSet::from([ROOT]);
        let mut queue = VecDeque::from([ROOT]);

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.node(id) else {
                return false;
            };

            if node.expression() == Some(expression) {
                return true;
            }

            for &child in &node.children {
                if visited.insert(child) {
                    queue.push_back(child);
                }
            }
        }

        false
    }

    /// Every expression, breadth-first (insertion order for a flat tree).
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> + '_ {
        self.breadth_first()
            .into_iter()
            .filter_map(move |id| self.node(id).and_then(Node::expression))
    }

    /// Number of expression nodes (the root is not counted)
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn breadth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut visited = HashSet::from([ROOT]);
        let mut queue = VecDeque::from([ROOT]);

        while let Some(id) = queue.pop_front() {
            order.push(id);

            if let Some(node) = self.node(id) {
                for &child in &node.children {
                    if visited.insert(child) {
                        queue.push_back(child);
                    }
                }
            }
        }

        order
    }
}

impl Default for ExpressionTree {
    fn default() -> Self {
        Self::new()
    }
}

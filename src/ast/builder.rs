//! Incremental construction of an [`Ast`]
//!
//! Nodes are pushed top-down: a node is created with its parent already known, so parent
//! links are consistent by construction and no cycle can be formed.

use super::error::ValidationError;
use super::node::{Ast, Node, NodeId, NodeKind};

#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent`, or at the top level when `parent` is `None`
    pub fn push(
        &mut self,
        kind: NodeKind,
        parent: Option<NodeId>,
    ) -> Result<NodeId, ValidationError> {
        let id = NodeId(self.nodes.len());
        match parent {
            Some(parent_id) => {
                let parent_node = self
                    .nodes
                    .get_mut(parent_id.0)
                    .ok_or(ValidationError::UnknownNode(parent_id.0))?;
                if parent_node.kind.is_leaf() {
                    return Err(ValidationError::LeafParent {
                        kind: parent_node.kind.name(),
                    });
                }
                parent_node.children.push(id);
            }
            None => self.roots.push(id),
        }
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Add a top-level node
    pub fn root(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.roots.push(id);
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes.get(id.0).map_or(0, |n| n.children.len())
    }

    /// Validate the tree and freeze it
    pub fn finish(self) -> Result<Ast, ValidationError> {
        for node in &self.nodes {
            if node.kind.requires_children() && node.children.is_empty() {
                return Err(ValidationError::EmptyNode {
                    kind: node.kind.name(),
                });
            }
        }
        log::trace!("built ast with {} nodes", self.nodes.len());
        Ok(Ast {
            nodes: self.nodes,
            roots: self.roots,
        })
    }
}

//! Builds an expression tree from tokens by precedence-order insertion.
//!
//! There is no operator or operand stack. Each token becomes a bare node that is inserted into
//! the tree under construction, starting from the root's cursor (the most recently inserted
//! node) and walking up through its ancestors:
//!
//! 1. Complete ancestors that [bind tighter](Kind::binds_tighter) than the new node are skipped.
//! 2. If the ancestor [merges](Kind::merges_with) with the new node (`+` into `+`, `*` into `*`),
//!    its arity grows by one and the new node is dropped.
//! 3. Otherwise the new node becomes the ancestor's last child. If the ancestor was already full,
//!    its last child is first moved into the new node, which is how `2 + 3 * 4` hands `3` over to
//!    the `*`.
//!
//! Parenthesized groups are built into their own root first, then inserted like any atom.
//!
//! Nodes live in an [`Arena`] during construction so that parents can be referred to by index;
//! the finished tree is frozen into an owned [`Node`].

pub mod precedence;

use crate::{
    error::{ArityExceeded, EmptyExpression, EmptyGroup, InvalidNumber, MissingOperand, UnrecognizedItem},
    tokenizer::{Token, TokenKind},
    tree::{Kind, Node},
};
use formula_error::Error;
use std::ops::Range;

/// The index of a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node under construction.
#[derive(Debug, Clone)]
struct Slot {
    kind: Kind,
    children: Vec<NodeId>,
    parent: Option<NodeId>,

    /// The declared arity of the node.
    size: usize,

    /// The region of the source code the node's token came from.
    span: Range<usize>,

    /// For roots, the most recently inserted node. Unused for other nodes.
    current: Option<NodeId>,
}

impl Slot {
    fn is_full(&self) -> bool {
        self.children.len() >= self.size
    }
}

/// Storage for the nodes of a tree under construction.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    slots: Vec<Slot>,
}

impl Arena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the given tokens into a tree, rooted at a main [`Kind::Root`].
    pub fn build(mut self, tokens: Vec<Token>) -> Result<Node, Error> {
        if tokens.is_empty() {
            return Err(Error::unspanned(EmptyExpression));
        }

        let root = self.build_root(tokens, true, 0..0)?;
        self.freeze(root)
    }

    /// Allocates a new, unattached node.
    fn alloc(&mut self, kind: Kind, span: Range<usize>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            size: kind.arity(),
            kind,
            children: Vec::new(),
            parent: None,
            span,
            current: None,
        });
        id
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.0]
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        &mut self.slots[id.0]
    }

    /// Builds the tokens into a new root, and returns the root.
    fn build_root(&mut self, tokens: Vec<Token>, main: bool, span: Range<usize>) -> Result<NodeId, Error> {
        let root = self.alloc(Kind::Root { main }, span);

        for token in tokens {
            let node = match token {
                Token::Leaf { kind, content, span } => {
                    let Some(node_kind) = kind.to_node_kind(&content) else {
                        return Err(if kind == TokenKind::Num {
                            Error::new(vec![span], InvalidNumber { literal: content })
                        } else {
                            Error::new(vec![span], UnrecognizedItem { item: content })
                        });
                    };
                    self.alloc(node_kind, span)
                },
                Token::Group { tokens, span } => {
                    if tokens.is_empty() {
                        return Err(Error::new(vec![span], EmptyGroup));
                    }
                    self.build_root(tokens, false, span)?
                },
            };

            self.insert(root, node)?;
        }

        Ok(root)
    }

    /// Inserts the unattached `node` into the tree owned by `root`.
    fn insert(&mut self, root: NodeId, node: NodeId) -> Result<(), Error> {
        let mut ancestor = self.slot(root).current.unwrap_or(root);

        // the root being built accepts anything, even when it is a nested root; an ancestor still
        // waiting for an operand takes the new node as that operand
        while ancestor != root
            && self.slot(ancestor).is_full()
            && self.slot(ancestor).kind.binds_tighter(&self.slot(node).kind)
        {
            match self.slot(ancestor).parent {
                Some(parent) => ancestor = parent,
                None => break,
            }
        }

        if self.slot(ancestor).kind.merges_with(&self.slot(node).kind) {
            self.slot_mut(ancestor).size += 1;
            self.slot_mut(root).current = Some(ancestor);
            return Ok(());
        }

        if self.slot(ancestor).is_full() && !self.slot(node).is_full() {
            if let Some(evicted) = self.slot_mut(ancestor).children.pop() {
                self.attach(node, evicted)?;
            }
        }

        self.attach(ancestor, node)?;
        self.slot_mut(root).current = Some(node);
        Ok(())
    }

    /// Appends `child` to the children of `parent`.
    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        let slot = self.slot(parent);
        if slot.is_full() {
            return Err(Error::new(vec![self.slot(child).span.clone()], ArityExceeded {
                node: slot.kind.name(),
                arity: slot.size,
            }));
        }

        self.slot_mut(parent).children.push(child);
        self.slot_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Converts the subtree at `id` into an owned [`Node`], checking that every node received
    /// all of its operands.
    fn freeze(&self, id: NodeId) -> Result<Node, Error> {
        let slot = self.slot(id);
        let missing = slot.size.saturating_sub(slot.children.len());
        if missing > 0 {
            return Err(match slot.kind {
                Kind::Root { main: true } => Error::unspanned(EmptyExpression),
                Kind::Root { main: false } => Error::new(vec![slot.span.clone()], EmptyGroup),
                _ => Error::new(vec![slot.span.clone()], MissingOperand {
                    operator: slot.kind.name(),
                    missing,
                }),
            });
        }

        let children = slot.children.iter()
            .map(|&child| self.freeze(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::new(slot.kind.clone(), children))
    }
}

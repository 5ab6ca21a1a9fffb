// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, transform queries.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Size, Vec2};

use crate::types::{NodeFlags, NodeId, NodeProps};

/// Top-level scene tree.
///
/// Nodes are stored in generational slots; removing a node frees its slot
/// for reuse with a bumped generation, so stale [`NodeId`]s are detectable
/// and every query returns `None` for them.
///
/// Unlike a spatially indexed box tree, this tree composes world transforms
/// on demand by walking the parent chain. Consumers here run short,
/// per-event queries over small child lists, so there is no batched commit
/// step and no acceleration structure to keep in sync.
///
/// ## Example
///
/// ```rust
/// use glade_scene::{NodeProps, Tree};
/// use kurbo::{Point, Size};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(None, NodeProps::default());
/// let child = tree.insert(
///     Some(root),
///     NodeProps {
///         position: Point::new(50.0, 50.0),
///         content_size: Size::new(20.0, 10.0),
///         ..NodeProps::default()
///     },
/// );
/// assert_eq!(tree.parent_of(child), Some(root));
/// assert_eq!(tree.children_of(root), &[child]);
/// ```
#[derive(Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    props: NodeProps,
}

impl Node {
    fn new(props: NodeProps) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            props,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as a child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, props: NodeProps) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(props));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(props)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` (or detach it as a root if `None`).
    ///
    /// Reparenting a node under its own descendant would create a cycle;
    /// that is a caller bug and the call becomes a no-op (debug assert).
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        let mut cur = new_parent;
        while let Some(n) = cur {
            debug_assert!(n != id, "reparent target lies inside the moved subtree");
            if n == id {
                return;
            }
            cur = self.parent_of(n);
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Whether `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.generations.get(id.idx()) == Some(&id.1)
            && self.nodes.get(id.idx()).is_some_and(|slot| slot.is_some())
    }

    /// Local properties of a live node.
    pub fn props(&self, id: NodeId) -> Option<&NodeProps> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.props)
    }

    /// Parent of a live node, if it has one.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// Children of a live node, in insertion order. Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.props(id).map(|p| p.flags)
    }

    /// Update the anchor position in parent space.
    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.position = position;
        }
    }

    /// Update the logical content size.
    pub fn set_content_size(&mut self, id: NodeId, size: Size) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.content_size = size;
        }
    }

    /// Update the per-axis scale.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.scale = scale;
        }
    }

    /// Update the stacking order among siblings.
    pub fn set_z_order(&mut self, id: NodeId, z: i32) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.z_order = z;
        }
    }

    /// Set or clear the `VISIBLE` flag.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.flags.set(NodeFlags::VISIBLE, visible);
        }
    }

    /// Replace all node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.props.flags = flags;
        }
    }

    /// The local→parent transform of a live node.
    ///
    /// Maps the node's content rectangle (origin at its own coordinate frame)
    /// into the parent's space: the anchor point lands on `position`, and
    /// scale is applied around the anchor.
    pub fn node_to_parent(&self, id: NodeId) -> Option<Affine> {
        self.props(id).map(local_to_parent)
    }

    /// The local→world transform of a live node.
    pub fn node_to_world(&self, id: NodeId) -> Option<Affine> {
        let mut tf = self.node_to_parent(id)?;
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            tf = local_to_parent(&self.node(p).props) * tf;
            cur = self.node(p).parent;
        }
        Some(tf)
    }

    /// The world→local transform of a live node.
    pub fn world_to_node(&self, id: NodeId) -> Option<Affine> {
        self.node_to_world(id).map(|tf| tf.inverse())
    }

    /// Whether `id` and every one of its ancestors carry [`NodeFlags::VISIBLE`].
    ///
    /// An invisible ancestor must not route interaction to descendants, so
    /// touch gates walk the whole chain rather than checking one node.
    pub fn branch_visible(&self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let mut cur = Some(id);
        while let Some(n) = cur {
            if !self.node(n).props.flags.contains(NodeFlags::VISIBLE) {
                return false;
            }
            cur = self.node(n).parent;
        }
        true
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("stale NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("stale NodeId")
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes.get_mut(id.idx()).and_then(|slot| slot.as_mut())
    }
}

fn local_to_parent(props: &NodeProps) -> Affine {
    let anchor_offset = Vec2::new(
        -props.anchor.x * props.content_size.width,
        -props.anchor.y * props.content_size.height,
    );
    Affine::translate(props.position.to_vec2())
        * Affine::scale_non_uniform(props.scale.x, props.scale.y)
        * Affine::translate(anchor_offset)
}

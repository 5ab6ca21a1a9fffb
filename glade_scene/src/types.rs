// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene graph: node identifiers, flags, and local geometry.

use kurbo::{Point, Size, Vec2};

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible. An invisible node also hides its descendants from
        /// interaction; see [`Tree::branch_visible`](crate::Tree::branch_visible).
        const VISIBLE  = 0b0000_0001;
        /// Node is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local geometry and state for a node.
///
/// See the crate docs for how `position`, `anchor`, and `content_size`
/// combine into the local→parent transform.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeProps {
    /// Where the anchor point lands in the parent's coordinate space.
    pub position: Point,
    /// Logical width/height of the node's content rectangle, independent of scale.
    pub content_size: Size,
    /// Per-axis scale applied around the anchor.
    pub scale: Vec2,
    /// Fractional anchor within the content rectangle. `(0.5, 0.5)` is the center.
    pub anchor: Point,
    /// Stacking order among siblings. Higher draws on top; insertion order breaks ties.
    pub z_order: i32,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            content_size: Size::ZERO,
            scale: Vec2::new(1.0, 1.0),
            anchor: Point::new(0.5, 0.5),
            z_order: 0,
            flags: NodeFlags::default(),
        }
    }
}

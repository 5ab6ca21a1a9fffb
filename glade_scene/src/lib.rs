// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Scene: a retained 2D scene graph with anchored transforms.
//!
//! ## Overview
//!
//! This crate provides the structural half of a widget stack: a hierarchy of
//! nodes with parent/child ownership, per-node geometry (position, content
//! size, scale, anchor, z-order), visibility and pickability flags, and
//! local→world transform composition. Interaction logic (selection, touch
//! state machines) lives in higher crates such as `glade_menu`; this crate
//! only answers structural and geometric questions.
//!
//! ## Coordinate model
//!
//! Every node owns a content rectangle from `(0, 0)` to
//! `(content_size.width, content_size.height)` in its own coordinate space.
//! The node's `anchor` is a fractional point inside that rectangle (the
//! default `(0.5, 0.5)` is the center), and `position` is where the anchor
//! lands in the parent's space. The local→parent transform is therefore
//!
//! ```text
//! translate(position) · scale(sx, sy) · translate(−anchor ⊙ content_size)
//! ```
//!
//! so a node placed at `position` with the default anchor is centered on
//! that point. The vertical axis direction is up to the embedding; the math
//! is axis-agnostic.
//!
//! ## Handles
//!
//! Nodes are addressed by generational [`NodeId`] handles. Removing a node
//! frees its slot for reuse with a bumped generation, so a stale handle can
//! never alias a newer node; all queries return `None` for stale ids.
//!
//! ## Transforms
//!
//! World transforms are composed on demand by walking the parent chain
//! ([`Tree::node_to_world`]). There is no batched commit step: consumers in
//! this workspace run short, per-event queries over small child lists, so
//! the freshest data is always what they want.
//!
//! ## Cameras
//!
//! [`Camera`] wraps a world→screen affine and converts touch locations into
//! world space ([`Camera::screen_to_world`]). A hit test performed without a
//! camera has nothing to project through and reports no hit.
//!
//! ## Example
//!
//! ```
//! use glade_scene::{NodeProps, Tree};
//! use kurbo::{Point, Size};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, NodeProps::default());
//! let child = tree.insert(
//!     Some(root),
//!     NodeProps {
//!         position: Point::new(10.0, 20.0),
//!         content_size: Size::new(40.0, 20.0),
//!         ..NodeProps::default()
//!     },
//! );
//!
//! // The child's content center maps onto its position in the parent.
//! let to_world = tree.node_to_world(child).unwrap();
//! assert_eq!(to_world * Point::new(20.0, 10.0), Point::new(10.0, 20.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod camera;
mod tree;
mod types;

pub use camera::Camera;
pub use tree::Tree;
pub use types::{NodeFlags, NodeId, NodeProps};

// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Menu: a menu container with touch tracking and layout.
//!
//! ## Overview
//!
//! [`Menu`] is a scene-graph container restricted to interactive items. It
//! owns three concerns:
//!
//! - **Gesture tracking**: an explicit waiting/tracking state machine over
//!   the `began → moved* → (ended | cancelled)` touch grammar. A beginning
//!   touch is accepted only when the menu is enabled, its whole ancestor
//!   chain is visible, a camera is present, and an item is under the touch;
//!   acceptance claims the touch (the host's dispatcher swallows it).
//! - **Hit testing**: a screen point is projected through the camera's
//!   inverse and each item's world→local transform, then tested against the
//!   item's content rectangle. The first visible, pickable, enabled item in
//!   insertion order wins.
//! - **Layout**: four deterministic alignment algorithms — vertical and
//!   horizontal stacks, and two grid layouts driven by explicit per-row or
//!   per-column counts.
//!
//! ## Items
//!
//! Children are constrained to the [`MenuItem`] capability at compile time:
//! only conforming types can be added, so there is no runtime child-type
//! check to fail. Item geometry (content size, scale, visibility) lives in
//! the [`glade_scene::Tree`]; item behavior (selection feedback, activation,
//! enablement) lives on the item value.
//!
//! Activation fires on release, never on press, and exactly once per
//! completed gesture; an interrupted gesture (`cancelled`) only clears the
//! selection highlight.
//!
//! ## Example
//!
//! ```
//! use glade_menu::{CallbackItem, Menu};
//! use glade_scene::{Camera, Tree};
//! use glade_touch::Touch;
//! use kurbo::{Point, Size};
//!
//! let mut tree = Tree::new();
//! let mut fired = false;
//! let mut menu = Menu::with_items(
//!     &mut tree,
//!     Size::new(200.0, 200.0),
//!     [(CallbackItem::new(|| fired = true), Size::new(40.0, 20.0))],
//! );
//! menu.align_items_vertically(&mut tree);
//!
//! // Tap the single item, which sits at the viewport center.
//! let camera = Camera::IDENTITY;
//! let touch = Touch::new(Point::new(100.0, 100.0));
//! assert!(menu.on_touch_began(&tree, Some(&camera), &touch));
//! menu.on_touch_ended(&touch);
//! drop(menu);
//! assert!(fired);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod align;
mod item;
mod menu;

pub use align::DEFAULT_PADDING;
pub use item::{CallbackItem, MenuItem};
pub use menu::{Menu, MenuState};

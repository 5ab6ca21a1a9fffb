// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu container: construction, child management, gesture tracking,
//! and hit testing.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

use glade_scene::{Camera, NodeFlags, NodeId, NodeProps, Tree};
use glade_touch::Touch;

use crate::item::MenuItem;

/// Interaction state of a menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuState {
    /// No gesture in flight; the next `began` may be accepted.
    Waiting,
    /// A claimed gesture is in flight; `moved`/`ended`/`cancelled` apply.
    Tracking,
}

pub(crate) struct Entry<I> {
    pub(crate) node: NodeId,
    pub(crate) item: I,
}

/// A container node restricted to [`MenuItem`] children.
///
/// The menu owns its items and references their scene nodes; the scene
/// [`Tree`] owns the geometry. The menu's own node is created centered in a
/// viewport with its local origin at the viewport center, so item positions
/// produced by the alignment methods are symmetric around zero.
///
/// ## Gesture contract
///
/// The host feeds the menu from a one-touch dispatcher:
///
/// - [`Menu::on_touch_began`] returns `true` when the menu claims the
///   touch; the host's listener should swallow it so lower-priority
///   listeners never see the gesture.
/// - [`Menu::on_touch_moved`], [`Menu::on_touch_ended`], and
///   [`Menu::on_touch_cancelled`] must only be delivered to a claimant;
///   calling them while no gesture is tracked is a dispatcher bug and
///   asserts.
///
/// The selected entry is held as an index into the child list — a
/// non-owning handle, cleared explicitly when that child is removed — and
/// the camera active at `began` is recorded so the whole gesture hit-tests
/// through one consistent projection.
pub struct Menu<I: MenuItem> {
    node: NodeId,
    pub(crate) entries: Vec<Entry<I>>,
    state: MenuState,
    selected: Option<usize>,
    selected_camera: Option<Camera>,
    enabled: bool,
}

impl<I: MenuItem> core::fmt::Debug for Menu<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Menu")
            .field("node", &self.node)
            .field("items", &self.entries.len())
            .field("state", &self.state)
            .field("selected", &self.selected)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<I: MenuItem> Menu<I> {
    /// Create an empty menu centered in `viewport`.
    ///
    /// The menu's node is inserted as a root with content size `viewport`
    /// and its local origin at the viewport center (anchor zero, positioned
    /// at the center), matching how item positions are laid out.
    pub fn new(tree: &mut Tree, viewport: Size) -> Self {
        let node = tree.insert(
            None,
            NodeProps {
                position: Point::new(viewport.width / 2.0, viewport.height / 2.0),
                content_size: viewport,
                anchor: Point::ZERO,
                ..NodeProps::default()
            },
        );
        Self {
            node,
            entries: Vec::new(),
            state: MenuState::Waiting,
            selected: None,
            selected_camera: None,
            enabled: true,
        }
    }

    /// Create a menu from ordered items, assigning ascending z starting at 0.
    ///
    /// Each item is given a fresh child node with the provided content size.
    pub fn with_items(
        tree: &mut Tree,
        viewport: Size,
        items: impl IntoIterator<Item = (I, Size)>,
    ) -> Self {
        let mut menu = Self::new(tree, viewport);
        for (item, size) in items {
            menu.add_item(tree, item, size);
        }
        menu
    }

    /// The menu's own scene node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current interaction state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Node of the item currently under the tracked touch, if any.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.selected.map(|i| self.entries[i].node)
    }

    /// Whether the menu accepts beginning touches.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gate or ungate beginning touches. A gesture already in flight is
    /// unaffected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Append an item, creating its scene node under the menu.
    ///
    /// The node's z-order is the item's index, so insertion order is the
    /// default stacking order.
    pub fn add_item(&mut self, tree: &mut Tree, item: I, size: Size) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "menus hold far fewer than 2^31 items"
        )]
        let z = self.entries.len() as i32;
        let node = tree.insert(
            Some(self.node),
            NodeProps {
                content_size: size,
                z_order: z,
                ..NodeProps::default()
            },
        );
        self.entries.push(Entry { node, item });
        node
    }

    /// Remove the item whose scene node is `node`, destroying the node.
    ///
    /// If the removed item is currently selected, the selection is cleared
    /// immediately; no later event of the gesture will touch it.
    pub fn remove_item(&mut self, tree: &mut Tree, node: NodeId) -> Option<I> {
        let idx = self.entries.iter().position(|e| e.node == node)?;
        match self.selected {
            Some(s) if s == idx => self.selected = None,
            Some(s) if s > idx => self.selected = Some(s - 1),
            _ => {}
        }
        tree.remove(node);
        Some(self.entries.remove(idx).item)
    }

    /// Borrow the item for a node.
    pub fn item(&self, node: NodeId) -> Option<&I> {
        self.entries
            .iter()
            .find(|e| e.node == node)
            .map(|e| &e.item)
    }

    /// Mutably borrow the item for a node.
    pub fn item_mut(&mut self, node: NodeId) -> Option<&mut I> {
        self.entries
            .iter_mut()
            .find(|e| e.node == node)
            .map(|e| &mut e.item)
    }

    /// Item nodes in insertion (z) order.
    pub fn item_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.node)
    }

    /// The menu left the active scene.
    ///
    /// A gesture in flight is abandoned: the selected item (if any) gets
    /// `unselected()` and the state machine returns to waiting, so no item
    /// stays highlighted across a scene transition.
    pub fn on_exit(&mut self) {
        if self.state == MenuState::Tracking {
            if let Some(i) = self.selected.take() {
                self.entries[i].item.unselected();
            }
            self.state = MenuState::Waiting;
        }
        self.selected_camera = None;
    }

    /// Offer a beginning touch to the menu.
    ///
    /// Accepted only when the menu is waiting, enabled, its whole ancestor
    /// chain is visible, a camera is present, and an item lies under the
    /// touch. On acceptance the camera is recorded for the rest of the
    /// gesture, the item is highlighted, and `true` is returned so the
    /// host's listener claims (and swallows) the touch. Otherwise `false`:
    /// the event stays available to lower-priority listeners.
    pub fn on_touch_began(&mut self, tree: &Tree, camera: Option<&Camera>, touch: &Touch) -> bool {
        let Some(camera) = camera else {
            return false;
        };
        if self.state != MenuState::Waiting || !self.enabled || !tree.branch_visible(self.node) {
            return false;
        }
        match self.item_at_point(tree, Some(camera), touch.location) {
            Some(i) => {
                self.state = MenuState::Tracking;
                self.selected = Some(i);
                self.selected_camera = Some(*camera);
                self.entries[i].item.selected();
                true
            }
            None => false,
        }
    }

    /// Track a move of the claimed touch.
    ///
    /// Re-runs hit testing with the camera recorded at `began` — not the
    /// current frame's camera — so one gesture sees one projection. If the
    /// touch crossed an item boundary, the old item (if any) gets
    /// `unselected()` and the new one (if any) `selected()`; the selection
    /// may become empty while the touch is over no item.
    pub fn on_touch_moved(&mut self, tree: &Tree, touch: &Touch) {
        assert!(
            self.state == MenuState::Tracking,
            "touch moved while the menu is not tracking a gesture"
        );
        let camera = self.selected_camera;
        let hit = self.item_at_point(tree, camera.as_ref(), touch.location);
        if hit != self.selected {
            if let Some(i) = self.selected {
                self.entries[i].item.unselected();
            }
            self.selected = hit;
            if let Some(i) = hit {
                self.entries[i].item.selected();
            }
        }
    }

    /// Finish the claimed touch normally.
    ///
    /// If an item is selected at this moment it gets `unselected()` then
    /// `activate()`, in that order — activation fires on release only, and
    /// exactly once per gesture. The selection and recorded camera are
    /// cleared and the menu returns to waiting.
    pub fn on_touch_ended(&mut self, _touch: &Touch) {
        assert!(
            self.state == MenuState::Tracking,
            "touch ended while the menu is not tracking a gesture"
        );
        if let Some(i) = self.selected.take() {
            let entry = &mut self.entries[i];
            entry.item.unselected();
            entry.item.activate();
        }
        self.state = MenuState::Waiting;
        self.selected_camera = None;
    }

    /// Abort the claimed touch.
    ///
    /// The selected item (if any) gets `unselected()` only — an interrupted
    /// gesture never activates.
    pub fn on_touch_cancelled(&mut self, _touch: &Touch) {
        assert!(
            self.state == MenuState::Tracking,
            "touch cancelled while the menu is not tracking a gesture"
        );
        if let Some(i) = self.selected.take() {
            self.entries[i].item.unselected();
        }
        self.state = MenuState::Waiting;
        self.selected_camera = None;
    }

    /// Find the item under a screen point.
    ///
    /// Returns the index of the first item in insertion order that is
    /// visible, pickable, enabled, and whose local content rectangle
    /// contains the projected point. `None` without a camera — there is
    /// nothing to project through — and `None` when the point misses every
    /// item. Zero-area rectangles never match.
    pub(crate) fn item_at_point(
        &self,
        tree: &Tree,
        camera: Option<&Camera>,
        screen: Point,
    ) -> Option<usize> {
        let camera = camera?;
        let world = camera.screen_to_world(screen);
        for (i, entry) in self.entries.iter().enumerate() {
            let Some(props) = tree.props(entry.node) else {
                continue;
            };
            if !props.flags.contains(NodeFlags::VISIBLE | NodeFlags::PICKABLE)
                || !entry.item.is_enabled()
            {
                continue;
            }
            let rect = Rect::from_origin_size(Point::ZERO, props.content_size);
            let Some(to_local) = tree.world_to_node(entry.node) else {
                continue;
            };
            if rect.contains(to_local * world) {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Affine, Vec2};

    /// Records every state-machine callback, tagged with the item's label.
    struct ProbeItem {
        label: &'static str,
        enabled: bool,
        log: Rc<RefCell<Vec<(&'static str, &'static str)>>>,
    }

    impl ProbeItem {
        fn new(label: &'static str, log: &Rc<RefCell<Vec<(&'static str, &'static str)>>>) -> Self {
            Self {
                label,
                enabled: true,
                log: Rc::clone(log),
            }
        }
    }

    impl MenuItem for ProbeItem {
        fn selected(&mut self) {
            self.log.borrow_mut().push((self.label, "selected"));
        }

        fn unselected(&mut self) {
            self.log.borrow_mut().push((self.label, "unselected"));
        }

        fn activate(&mut self) {
            self.log.borrow_mut().push((self.label, "activate"));
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    type Log = Rc<RefCell<Vec<(&'static str, &'static str)>>>;

    const VIEW: Size = Size::new(200.0, 200.0);

    /// Menu centered at (100, 100) with three stacked 40×20 items.
    ///
    /// With default padding the item centers sit at menu-local y = 25, 0,
    /// −25, i.e. world (100, 125), (100, 100), (100, 75).
    fn stacked_menu(tree: &mut Tree) -> (Menu<ProbeItem>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let size = Size::new(40.0, 20.0);
        let mut menu = Menu::with_items(
            tree,
            VIEW,
            [
                (ProbeItem::new("a", &log), size),
                (ProbeItem::new("b", &log), size),
                (ProbeItem::new("c", &log), size),
            ],
        );
        menu.align_items_vertically(tree);
        (menu, log)
    }

    fn cam() -> Camera {
        Camera::IDENTITY
    }

    #[test]
    fn began_without_camera_is_rejected() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        // Dead center of item "b".
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(!menu.on_touch_began(&tree, None, &touch));
        assert_eq!(menu.state(), MenuState::Waiting);
    }

    #[test]
    fn began_outside_every_item_is_rejected() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(5.0, 5.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &touch));
        assert_eq!(menu.state(), MenuState::Waiting);
        assert_eq!(menu.selected_node(), None);
    }

    #[test]
    fn began_on_an_item_claims_and_selects() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 125.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        assert_eq!(menu.state(), MenuState::Tracking);
        assert_eq!(menu.selected_node(), menu.item_nodes().next());
        assert_eq!(log.borrow().as_slice(), &[("a", "selected")]);
    }

    #[test]
    fn disabled_menu_rejects_began() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        menu.set_enabled(false);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &touch));
    }

    #[test]
    fn invisible_ancestor_rejects_began() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        let hidden = tree.insert(None, NodeProps::default());
        tree.reparent(menu.node(), Some(hidden));
        tree.set_visible(hidden, false);

        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &touch));
        assert_eq!(menu.state(), MenuState::Waiting);
    }

    #[test]
    fn moved_crossing_items_swaps_selection() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let on_a = Touch::new(Point::new(100.0, 125.0));
        let on_b = Touch::new(Point::new(100.0, 100.0));
        let nowhere = Touch::new(Point::new(5.0, 5.0));

        assert!(menu.on_touch_began(&tree, Some(&cam()), &on_a));
        menu.on_touch_moved(&tree, &on_b);
        // Off every item: tracking continues with an empty selection.
        menu.on_touch_moved(&tree, &nowhere);
        assert_eq!(menu.state(), MenuState::Tracking);
        assert_eq!(menu.selected_node(), None);

        assert_eq!(
            log.borrow().as_slice(),
            &[
                ("a", "selected"),
                ("a", "unselected"),
                ("b", "selected"),
                ("b", "unselected"),
            ]
        );
    }

    #[test]
    fn moved_within_the_same_item_emits_nothing() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 125.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        menu.on_touch_moved(&tree, &Touch::new(Point::new(101.0, 126.0)));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn ended_unselects_then_activates_exactly_once() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        menu.on_touch_ended(&touch);

        assert_eq!(menu.state(), MenuState::Waiting);
        assert_eq!(menu.selected_node(), None);
        assert_eq!(
            log.borrow().as_slice(),
            &[("b", "selected"), ("b", "unselected"), ("b", "activate")]
        );
    }

    #[test]
    fn ended_with_no_selection_activates_nothing() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        menu.on_touch_moved(&tree, &Touch::new(Point::new(5.0, 5.0)));
        menu.on_touch_ended(&touch);

        assert_eq!(menu.state(), MenuState::Waiting);
        assert!(
            !log.borrow().iter().any(|(_, ev)| *ev == "activate"),
            "no item may activate when the gesture ends off-item"
        );
    }

    #[test]
    fn cancelled_never_activates() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        menu.on_touch_cancelled(&touch);

        assert_eq!(menu.state(), MenuState::Waiting);
        assert_eq!(menu.selected_node(), None);
        assert_eq!(
            log.borrow().as_slice(),
            &[("b", "selected"), ("b", "unselected")]
        );
    }

    #[test]
    fn a_second_gesture_works_after_the_first() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        for _ in 0..2 {
            assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
            menu.on_touch_ended(&touch);
        }
        let activations = log
            .borrow()
            .iter()
            .filter(|(_, ev)| *ev == "activate")
            .count();
        assert_eq!(activations, 2);
    }

    #[test]
    #[should_panic(expected = "not tracking")]
    fn moved_while_waiting_is_a_contract_violation() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        menu.on_touch_moved(&tree, &Touch::new(Point::ZERO));
    }

    #[test]
    fn moved_uses_the_camera_recorded_at_began() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        // Camera pans the world by (-50, -50): world (100, 100) appears at
        // screen (50, 50).
        let began_cam = Camera::new(Affine::translate(Vec2::new(-50.0, -50.0)));
        let touch = Touch::new(Point::new(50.0, 50.0));
        assert!(menu.on_touch_began(&tree, Some(&began_cam), &touch));

        // The live camera may have moved since; the gesture still projects
        // through the recorded one, so screen (50, 75) lands on item "a".
        menu.on_touch_moved(&tree, &Touch::new(Point::new(50.0, 75.0)));
        assert_eq!(
            log.borrow().last(),
            Some(&("a", "selected")),
            "hit test must use the began-time camera"
        );
    }

    #[test]
    fn disabled_and_invisible_items_are_transparent() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        let nodes: Vec<NodeId> = menu.item_nodes().collect();

        menu.item_mut(nodes[1]).unwrap().enabled = false;
        let on_b = Touch::new(Point::new(100.0, 100.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &on_b));

        tree.set_visible(nodes[0], false);
        let on_a = Touch::new(Point::new(100.0, 125.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &on_a));
    }

    #[test]
    fn zero_area_items_never_match() {
        let mut tree = Tree::new();
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut menu = Menu::with_items(
            &mut tree,
            VIEW,
            [(ProbeItem::new("dot", &log), Size::ZERO)],
        );
        // The item sits at the menu center; its rectangle is empty.
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(!menu.on_touch_began(&tree, Some(&cam()), &touch));
    }

    #[test]
    fn overlapping_items_resolve_to_the_first_in_order() {
        let mut tree = Tree::new();
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let size = Size::new(40.0, 40.0);
        let mut menu = Menu::with_items(
            &mut tree,
            VIEW,
            [
                (ProbeItem::new("first", &log), size),
                (ProbeItem::new("second", &log), size),
            ],
        );
        // Both items left at the menu center, fully overlapping.
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        assert_eq!(log.borrow().as_slice(), &[("first", "selected")]);
        drop(menu);
    }

    #[test]
    fn hit_testing_is_deterministic() {
        let mut tree = Tree::new();
        let (menu, _log) = stacked_menu(&mut tree);
        let pt = Point::new(100.0, 125.0);
        let first = menu.item_at_point(&tree, Some(&cam()), pt);
        for _ in 0..10 {
            assert_eq!(menu.item_at_point(&tree, Some(&cam()), pt), first);
        }
        assert_eq!(first, Some(0));
    }

    #[test]
    fn removing_the_selected_item_clears_selection_immediately() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        let selected = menu.selected_node().unwrap();

        let removed = menu.remove_item(&mut tree, selected);
        assert!(removed.is_some());
        assert_eq!(menu.selected_node(), None);
        assert_eq!(menu.state(), MenuState::Tracking);

        // Later events of the gesture must not touch the removed item.
        menu.on_touch_moved(&tree, &Touch::new(Point::new(5.0, 5.0)));
        menu.on_touch_ended(&touch);
        assert!(!log.borrow().iter().any(|(_, ev)| *ev == "activate"));
        assert_eq!(menu.state(), MenuState::Waiting);
    }

    #[test]
    fn removing_an_earlier_item_keeps_the_selection_aimed() {
        let mut tree = Tree::new();
        let (mut menu, _log) = stacked_menu(&mut tree);
        let nodes: Vec<NodeId> = menu.item_nodes().collect();
        let touch = Touch::new(Point::new(100.0, 100.0)); // item "b"
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        assert_eq!(menu.selected_node(), Some(nodes[1]));

        menu.remove_item(&mut tree, nodes[0]);
        assert_eq!(menu.selected_node(), Some(nodes[1]));
    }

    #[test]
    fn exit_while_tracking_resets_and_unselects() {
        let mut tree = Tree::new();
        let (mut menu, log) = stacked_menu(&mut tree);
        let touch = Touch::new(Point::new(100.0, 100.0));
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));

        menu.on_exit();
        assert_eq!(menu.state(), MenuState::Waiting);
        assert_eq!(menu.selected_node(), None);
        assert_eq!(
            log.borrow().as_slice(),
            &[("b", "selected"), ("b", "unselected")]
        );

        // A new gesture starts cleanly afterwards.
        assert!(menu.on_touch_began(&tree, Some(&cam()), &touch));
        menu.on_touch_ended(&touch);
    }

    #[test]
    fn items_get_ascending_z_from_insertion_order() {
        let mut tree = Tree::new();
        let (menu, _log) = stacked_menu(&mut tree);
        for (i, node) in menu.item_nodes().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "test indices are tiny"
            )]
            let expected = i as i32;
            assert_eq!(tree.props(node).unwrap().z_order, expected);
        }
    }
}

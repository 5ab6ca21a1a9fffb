// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu-item capability and a minimal callback-backed item.

/// Capability required of every menu child.
///
/// A [`Menu`](crate::Menu) is not a general-purpose container: only types
/// implementing this trait can be added, which moves the original
/// "children must be menu items" runtime check into the type system.
///
/// The menu drives the four methods from its state machine:
///
/// - [`MenuItem::selected`] when the tracked touch enters the item's
///   rectangle, [`MenuItem::unselected`] when it leaves — pure highlight
///   feedback, possibly many times per gesture.
/// - [`MenuItem::activate`] exactly once, when a gesture ends on the item.
/// - [`MenuItem::is_enabled`] gates hit testing; a disabled item is
///   transparent to touches.
pub trait MenuItem {
    /// The tracked touch entered this item. Default: no feedback.
    fn selected(&mut self) {}

    /// The tracked touch left this item (or the gesture finished). Default: no feedback.
    fn unselected(&mut self) {}

    /// A gesture ended on this item.
    fn activate(&mut self);

    /// Whether the item currently accepts touches.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<I: MenuItem + ?Sized> MenuItem for alloc::boxed::Box<I> {
    fn selected(&mut self) {
        (**self).selected();
    }

    fn unselected(&mut self) {
        (**self).unselected();
    }

    fn activate(&mut self) {
        (**self).activate();
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// A menu item that runs a callback on activation.
///
/// Tracks an enabled flag and the transient highlight state; disabled items
/// neither hit-test nor run their callback.
pub struct CallbackItem<F: FnMut()> {
    enabled: bool,
    highlighted: bool,
    callback: F,
}

impl<F: FnMut()> CallbackItem<F> {
    /// Create an enabled item with the given activation callback.
    pub const fn new(callback: F) -> Self {
        Self {
            enabled: true,
            highlighted: false,
            callback,
        }
    }

    /// Enable or disable the item.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether a tracked touch is currently over the item.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl<F: FnMut()> core::fmt::Debug for CallbackItem<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallbackItem")
            .field("enabled", &self.enabled)
            .field("highlighted", &self.highlighted)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut()> MenuItem for CallbackItem<F> {
    fn selected(&mut self) {
        self.highlighted = true;
    }

    fn unselected(&mut self) {
        self.highlighted = false;
    }

    fn activate(&mut self) {
        if self.enabled {
            (self.callback)();
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

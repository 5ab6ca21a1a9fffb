// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for touch dispatch: touches, phases, listener handles.

use kurbo::Point;

/// One logical touch sample.
///
/// The location is in screen space; consumers project it through a camera
/// and node transforms as needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    /// Screen-space location of the touch.
    pub location: Point,
}

impl Touch {
    /// Create a touch at a screen-space location.
    pub const fn new(location: Point) -> Self {
        Self { location }
    }
}

/// Phase of a touch within a gesture.
///
/// A gesture follows the grammar `Began → Moved* → (Ended | Cancelled)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    /// The touch landed.
    Began,
    /// The touch moved while down.
    Moved,
    /// The touch lifted normally.
    Ended,
    /// The gesture was interrupted (system alert, multi-touch conflict).
    Cancelled,
}

/// Handle for a registered listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A listener's answer to a `began` dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TouchResponse {
    /// Accept the touch and track the rest of the gesture.
    Claim,
    /// Decline; propagation continues to lower-priority listeners.
    Pass,
}

// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Touch: a deterministic, priority-ordered dispatcher for one
//! logical touch stream.
//!
//! ## Overview
//!
//! This crate routes the four phases of a touch gesture — began → moved* →
//! (ended | cancelled) — to registered listeners. It performs no hit
//! testing of its own: each listener's handler decides whether to claim a
//! beginning touch (for example by hit testing a widget subtree) and the
//! router bookkeeps which listeners own the rest of the gesture.
//!
//! ## Ordering and swallowing
//!
//! Listeners register with an `i32` priority; lower values hear about a
//! touch first, and ties are broken by registration order. When a handler
//! returns [`TouchResponse::Claim`] from a `began` dispatch, the listener
//! becomes a claimant for the gesture. If that listener was registered as
//! *swallowing*, propagation stops immediately and lower-priority listeners
//! never see the event; otherwise delivery continues and several listeners
//! may track the same gesture.
//!
//! `moved`, `ended`, and `cancelled` events are delivered only to
//! claimants, in priority order. Ending or cancelling releases all claims.
//!
//! Hosts that funnel a platform event stream through one closure can use
//! [`TouchRouter::dispatch`] with a [`TouchPhase`] instead of the four
//! phase-specific methods.
//!
//! ## Example
//!
//! ```
//! use glade_touch::{Touch, TouchResponse, TouchRouter};
//! use kurbo::Point;
//!
//! let mut router = TouchRouter::new();
//! let menu = router.add_listener(-128, true);
//! let backdrop = router.add_listener(0, false);
//!
//! let touch = Touch::new(Point::new(40.0, 40.0));
//! let claimed = router.dispatch_began(&touch, |id, _touch| {
//!     if id == menu {
//!         TouchResponse::Claim
//!     } else {
//!         TouchResponse::Pass
//!     }
//! });
//!
//! // The menu claimed and swallows, so the backdrop never saw the touch.
//! assert_eq!(claimed, Some(menu));
//! assert!(router.has_active_gesture());
//!
//! router.dispatch_ended(&touch, |id, _touch| assert_eq!(id, menu));
//! assert!(!router.has_active_gesture());
//! # let _ = backdrop;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod router;
mod types;

pub use router::TouchRouter;
pub use types::{ListenerId, Touch, TouchPhase, TouchResponse};

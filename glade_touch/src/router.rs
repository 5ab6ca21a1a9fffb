// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Keeps the listener registry, orders delivery, and tracks which listeners
//! claimed the in-flight gesture.
//!
//! ## Delivery
//!
//! - `began` walks listeners by ascending priority (ties: registration
//!   order) and records claims; a swallowing claim stops the walk.
//! - `moved`/`ended`/`cancelled` go only to claimants, in claim order.
//! - `ended` and `cancelled` release every claim.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{ListenerId, Touch, TouchPhase, TouchResponse};

#[derive(Clone, Copy, Debug)]
struct Listener {
    priority: i32,
    swallows: bool,
    /// Registration order, used to break priority ties deterministically.
    seq: u64,
}

/// Deterministic one-touch dispatcher.
///
/// ## Usage
///
/// - Register listeners with [`TouchRouter::add_listener`], giving each a
///   priority and a swallow flag.
/// - Feed the four gesture phases through [`TouchRouter::dispatch_began`],
///   [`TouchRouter::dispatch_moved`], [`TouchRouter::dispatch_ended`], and
///   [`TouchRouter::dispatch_cancelled`], supplying a handler closure each
///   time. The router decides *who* hears an event; the handler decides
///   *what* happens and, for `began`, whether to claim.
///
/// The router owns no widget state, so the same instance can serve any
/// number of independent components; each component's handler claims only
/// touches it recognizes.
#[derive(Debug, Default)]
pub struct TouchRouter {
    listeners: HashMap<ListenerId, Listener>,
    /// Claimants of the in-flight gesture, in delivery order.
    claims: SmallVec<[ListenerId; 2]>,
    next_id: u64,
    next_seq: u64,
}

impl TouchRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// Lower `priority` values are offered a beginning touch first. When a
    /// listener with `swallows` set claims a touch, lower-priority listeners
    /// never see that event.
    pub fn add_listener(&mut self, priority: i32, swallows: bool) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.listeners.insert(
            id,
            Listener {
                priority,
                swallows,
                seq,
            },
        );
        id
    }

    /// Remove a listener, dropping any claim it holds on the current gesture.
    ///
    /// Returns `false` if the id was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.claims.retain(|c| *c != id);
        self.listeners.remove(&id).is_some()
    }

    /// Change a listener's priority. Takes effect from the next `began`.
    ///
    /// Returns `false` if the id was not registered.
    pub fn set_priority(&mut self, id: ListenerId, priority: i32) -> bool {
        match self.listeners.get_mut(&id) {
            Some(l) => {
                l.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Whether a gesture is currently claimed by at least one listener.
    pub fn has_active_gesture(&self) -> bool {
        !self.claims.is_empty()
    }

    /// Claimants of the in-flight gesture, in delivery order.
    pub fn claimants(&self) -> &[ListenerId] {
        &self.claims
    }

    /// Dispatch a beginning touch and record claims.
    ///
    /// The handler is called once per listener in delivery order until a
    /// swallowing listener claims. Returns the first claimant, if any.
    ///
    /// The input source guarantees the gesture grammar, so claims from a
    /// previous gesture cannot be outstanding here; if an upstream bug
    /// violates that, the stale claims are dropped so the stream cannot
    /// wedge (debug assert).
    pub fn dispatch_began(
        &mut self,
        touch: &Touch,
        mut handler: impl FnMut(ListenerId, &Touch) -> TouchResponse,
    ) -> Option<ListenerId> {
        debug_assert!(
            self.claims.is_empty(),
            "touch began while a gesture is still claimed"
        );
        self.claims.clear();

        let mut order: SmallVec<[(i32, u64, ListenerId); 8]> = self
            .listeners
            .iter()
            .map(|(id, l)| (l.priority, l.seq, *id))
            .collect();
        order.sort_unstable();

        for (_, _, id) in order {
            if handler(id, touch) == TouchResponse::Claim {
                self.claims.push(id);
                // Stable lookup: the listener may only have been removed by
                // `remove_listener`, which the handler cannot reach.
                if self.listeners[&id].swallows {
                    break;
                }
            }
        }
        self.claims.first().copied()
    }

    /// Dispatch a move to every claimant of the current gesture.
    pub fn dispatch_moved(&mut self, touch: &Touch, mut handler: impl FnMut(ListenerId, &Touch)) {
        for id in &self.claims {
            handler(*id, touch);
        }
    }

    /// Dispatch a normal release to every claimant and end the gesture.
    pub fn dispatch_ended(&mut self, touch: &Touch, mut handler: impl FnMut(ListenerId, &Touch)) {
        for id in &self.claims {
            handler(*id, touch);
        }
        self.claims.clear();
    }

    /// Dispatch an interruption to every claimant and end the gesture.
    pub fn dispatch_cancelled(
        &mut self,
        touch: &Touch,
        mut handler: impl FnMut(ListenerId, &Touch),
    ) {
        for id in &self.claims {
            handler(*id, touch);
        }
        self.claims.clear();
    }

    /// Dispatch one phase of the gesture through a single phase-aware handler.
    ///
    /// Convenience over the four phase-specific methods for hosts that
    /// funnel a platform event stream through one closure. The handler's
    /// response is honored only for [`TouchPhase::Began`]; later phases
    /// reach claimants regardless of what it returns. Returns the first
    /// claimant for a `began`, `None` for every other phase.
    pub fn dispatch(
        &mut self,
        phase: TouchPhase,
        touch: &Touch,
        mut handler: impl FnMut(ListenerId, TouchPhase, &Touch) -> TouchResponse,
    ) -> Option<ListenerId> {
        match phase {
            TouchPhase::Began => self.dispatch_began(touch, |id, t| handler(id, phase, t)),
            TouchPhase::Moved => {
                self.dispatch_moved(touch, |id, t| {
                    handler(id, phase, t);
                });
                None
            }
            TouchPhase::Ended => {
                self.dispatch_ended(touch, |id, t| {
                    handler(id, phase, t);
                });
                None
            }
            TouchPhase::Cancelled => {
                self.dispatch_cancelled(touch, |id, t| {
                    handler(id, phase, t);
                });
                None
            }
        }
    }
}

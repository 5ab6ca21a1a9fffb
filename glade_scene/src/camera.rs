// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D camera mapping between world and screen space.

use kurbo::{Affine, Point};

/// The viewing transform active during a render or interaction pass.
///
/// A camera wraps the world→screen affine. Touch locations arrive in screen
/// space; hit testing projects them into world space through
/// [`Camera::screen_to_world`] before applying a node's world→local
/// transform. Code that interacts while no camera-scoped pass is active has
/// nothing to project through and must treat the camera as absent.
///
/// `Camera` is `Copy`, so interaction code can record the camera active when
/// a gesture began and keep using it for the rest of that gesture even if
/// the live camera moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    world_to_screen: Affine,
}

impl Camera {
    /// Create a camera from its world→screen transform.
    pub const fn new(world_to_screen: Affine) -> Self {
        Self { world_to_screen }
    }

    /// The identity camera: world space and screen space coincide.
    pub const IDENTITY: Self = Self::new(Affine::IDENTITY);

    /// The world→screen transform.
    pub const fn transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Map a world-space point to screen space.
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Map a screen-space point to world space.
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.world_to_screen.inverse() * pt
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Affine, Point, Vec2};

    #[test]
    fn identity_round_trip() {
        let cam = Camera::default();
        let pt = Point::new(12.0, -3.0);
        assert_eq!(cam.screen_to_world(pt), pt);
        assert_eq!(cam.world_to_screen(pt), pt);
    }

    #[test]
    fn panned_camera_offsets_points() {
        // The camera looks at a world region offset by (100, 50).
        let cam = Camera::new(Affine::translate(Vec2::new(-100.0, -50.0)));
        assert_eq!(
            cam.screen_to_world(Point::new(10.0, 10.0)),
            Point::new(110.0, 60.0)
        );
        assert_eq!(
            cam.world_to_screen(Point::new(110.0, 60.0)),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn zoomed_camera_scales_points() {
        let cam = Camera::new(Affine::scale(2.0));
        assert_eq!(
            cam.screen_to_world(Point::new(20.0, 40.0)),
            Point::new(10.0, 20.0)
        );
    }
}

// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical menu driven through the touch router.
//!
//! This demo shows how to combine:
//! - `glade_scene` for node geometry and the camera,
//! - `glade_touch` for priority-ordered dispatch with swallowing,
//! - `glade_menu` for item tracking, hit testing, and layout.
//!
//! Run:
//! - `cargo run -p glade_demos --example menu_basics`

use glade_menu::{CallbackItem, Menu, MenuItem};
use glade_scene::{Camera, Tree};
use glade_touch::{Touch, TouchPhase, TouchResponse, TouchRouter};
use kurbo::{Point, Size};

fn item(label: &'static str) -> (Box<dyn MenuItem>, Size) {
    (
        Box::new(CallbackItem::new(move || println!("  -> {label} activated"))),
        Size::new(120.0, 30.0),
    )
}

fn main() {
    let viewport = Size::new(480.0, 320.0);
    let mut tree = Tree::new();

    // Three stacked items centered in the viewport.
    let mut menu = Menu::with_items(
        &mut tree,
        viewport,
        [item("Play"), item("Options"), item("Quit")],
    );
    menu.align_items_vertically(&mut tree);

    // The menu claims touches ahead of everything else and swallows them.
    let mut router = TouchRouter::new();
    let menu_listener = router.add_listener(-128, true);
    let background = router.add_listener(0, false);

    let camera = Camera::IDENTITY;

    // A tap on "Play" (top item, 35 units above the viewport center), a drag
    // from "Play" down onto "Options", and a tap on empty space.
    let gestures: [(&str, Point, Point); 3] = [
        ("tap Play", Point::new(240.0, 195.0), Point::new(240.0, 195.0)),
        ("drag Play -> Options", Point::new(240.0, 195.0), Point::new(240.0, 160.0)),
        ("tap empty space", Point::new(20.0, 20.0), Point::new(20.0, 20.0)),
    ];

    for (label, down, up) in gestures {
        println!("== {label} ==");

        let mut stream = vec![(TouchPhase::Began, down)];
        if down != up {
            stream.push((TouchPhase::Moved, up));
        }
        stream.push((TouchPhase::Ended, up));

        for (phase, at) in stream {
            let claimed = router.dispatch(phase, &Touch::new(at), |id, phase, touch| {
                if id == menu_listener {
                    match phase {
                        TouchPhase::Began => {
                            if menu.on_touch_began(&tree, Some(&camera), touch) {
                                return TouchResponse::Claim;
                            }
                        }
                        TouchPhase::Moved => menu.on_touch_moved(&tree, touch),
                        TouchPhase::Ended => menu.on_touch_ended(touch),
                        TouchPhase::Cancelled => menu.on_touch_cancelled(touch),
                    }
                } else if id == background {
                    println!("  background saw the touch");
                }
                TouchResponse::Pass
            });
            if phase == TouchPhase::Began {
                println!("  claimed by menu: {}", claimed == Some(menu_listener));
            }
        }
    }
}

// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment of menu items within the menu's local space.
//!
//! All four algorithms position item *centers* in the menu's local
//! coordinates, whose origin is the menu center with y pointing up. They are
//! pure functions of the items' content sizes (and, for the stacks, scales)
//! in insertion order; running one twice in a row is a no-op.

use kurbo::{Point, Size};

use glade_scene::Tree;

use crate::item::MenuItem;
use crate::menu::Menu;

/// Default gap between adjacent items, in menu-local units.
pub const DEFAULT_PADDING: f64 = 5.0;

/// `max` that ignores NaN sizes instead of poisoning the accumulator.
fn grow(acc: f64, v: f64) -> f64 {
    if acc >= v || v.is_nan() { acc } else { v }
}

impl<I: MenuItem> Menu<I> {
    /// Stack items in a vertical column, centered on the menu origin, with
    /// [`DEFAULT_PADDING`] between adjacent items.
    ///
    /// The first item ends up on top; items are measured by scaled height.
    pub fn align_items_vertically(&mut self, tree: &mut Tree) {
        self.align_items_vertically_with_padding(tree, DEFAULT_PADDING);
    }

    /// Vertical stack with an explicit gap.
    pub fn align_items_vertically_with_padding(&mut self, tree: &mut Tree, padding: f64) {
        let mut height = -padding;
        for entry in &self.entries {
            let props = tree.props(entry.node).expect("stale menu item node");
            height += props.content_size.height * props.scale.y + padding;
        }

        let mut y = height / 2.0;
        for i in 0..self.entries.len() {
            let node = self.entries[i].node;
            let props = tree.props(node).expect("stale menu item node");
            let h = props.content_size.height * props.scale.y;
            tree.set_position(node, Point::new(0.0, y - h / 2.0));
            y -= h + padding;
        }
    }

    /// Lay items out in a horizontal row, centered on the menu origin, with
    /// [`DEFAULT_PADDING`] between adjacent items.
    ///
    /// The first item ends up leftmost; items are measured by scaled width.
    pub fn align_items_horizontally(&mut self, tree: &mut Tree) {
        self.align_items_horizontally_with_padding(tree, DEFAULT_PADDING);
    }

    /// Horizontal row with an explicit gap.
    pub fn align_items_horizontally_with_padding(&mut self, tree: &mut Tree, padding: f64) {
        let mut width = -padding;
        for entry in &self.entries {
            let props = tree.props(entry.node).expect("stale menu item node");
            width += props.content_size.width * props.scale.x + padding;
        }

        let mut x = -width / 2.0;
        for i in 0..self.entries.len() {
            let node = self.entries[i].node;
            let props = tree.props(node).expect("stale menu item node");
            let w = props.content_size.width * props.scale.x;
            tree.set_position(node, Point::new(x + w / 2.0, 0.0));
            x += w + padding;
        }
    }

    /// Lay items out in rows of explicit widths: `rows[r]` is the number of
    /// columns in row `r`.
    ///
    /// Rows stack downward from the top, each as tall as its tallest item
    /// plus a fixed gap; within a row, items are spread evenly across the
    /// menu's content width. Items fill rows in insertion order.
    ///
    /// Panics if `rows` does not exactly cover the item count, or if any
    /// count is zero.
    pub fn align_items_in_columns(&mut self, tree: &mut Tree, rows: &[usize]) {
        let mut height = -5.0;
        let mut row = 0;
        let mut row_height = 0.0;
        let mut columns_occupied = 0;

        for entry in &self.entries {
            assert!(row < rows.len(), "row counts must cover every item");
            let row_columns = rows[row];
            assert!(row_columns != 0, "a row can't hold zero items");

            let props = tree.props(entry.node).expect("stale menu item node");
            row_height = grow(row_height, props.content_size.height);
            columns_occupied += 1;
            if columns_occupied >= row_columns {
                height += row_height + 5.0;
                columns_occupied = 0;
                row_height = 0.0;
                row += 1;
            }
        }
        assert!(
            columns_occupied == 0,
            "row counts must exactly cover the item count"
        );

        let menu_size = self.menu_size(tree);
        let mut row = 0;
        let mut row_height = 0.0;
        let mut row_columns = 0;
        let mut columns_occupied = 0;
        let mut w = 0.0;
        let mut x = 0.0;
        let mut y = height / 2.0;

        for i in 0..self.entries.len() {
            if row_columns == 0 {
                row_columns = rows[row];
                w = menu_size.width / (row_columns as f64 + 1.0);
                x = w;
            }

            let node = self.entries[i].node;
            let props = tree.props(node).expect("stale menu item node");
            let item_height = props.content_size.height;
            row_height = grow(row_height, item_height);
            tree.set_position(
                node,
                Point::new(x - menu_size.width / 2.0, y - item_height / 2.0),
            );

            x += w;
            columns_occupied += 1;
            if columns_occupied >= row_columns {
                y -= row_height + 5.0;
                columns_occupied = 0;
                row_columns = 0;
                row_height = 0.0;
                row += 1;
            }
        }
    }

    /// Lay items out in columns of explicit heights: `columns[c]` is the
    /// number of rows in column `c`.
    ///
    /// Columns advance rightward from the left edge of the block, each as
    /// wide as its widest item plus a fixed gap; within a column, items
    /// stack downward from the column top. Items fill columns in insertion
    /// order. Unequal column heights share a top edge, so shorter columns
    /// end higher.
    ///
    /// Panics if `columns` does not exactly cover the item count, or if any
    /// count is zero.
    pub fn align_items_in_rows(&mut self, tree: &mut Tree, columns: &[usize]) {
        let mut column_widths = alloc::vec::Vec::new();
        let mut column_heights = alloc::vec::Vec::new();

        let mut width = -10.0;
        let mut column_height = -5.0;
        let mut column = 0;
        let mut column_width = 0.0;
        let mut rows_occupied = 0;

        for entry in &self.entries {
            assert!(column < columns.len(), "column counts must cover every item");
            let column_rows = columns[column];
            assert!(column_rows != 0, "a column can't hold zero items");

            let props = tree.props(entry.node).expect("stale menu item node");
            column_width = grow(column_width, props.content_size.width);
            column_height += props.content_size.height + 5.0;
            rows_occupied += 1;
            if rows_occupied >= column_rows {
                column_widths.push(column_width);
                column_heights.push(column_height);
                width += column_width + 10.0;
                rows_occupied = 0;
                column_width = 0.0;
                column_height = -5.0;
                column += 1;
            }
        }
        assert!(
            rows_occupied == 0,
            "column counts must exactly cover the item count"
        );

        let menu_size = self.menu_size(tree);
        let mut column = 0;
        let mut column_width = 0.0;
        let mut column_rows = 0;
        let mut rows_occupied = 0;
        let mut x = -width / 2.0;
        let mut y = 0.0;

        for i in 0..self.entries.len() {
            if column_rows == 0 {
                column_rows = columns[column];
                y = column_heights[column];
            }

            let node = self.entries[i].node;
            let props = tree.props(node).expect("stale menu item node");
            let item_size = props.content_size;
            column_width = grow(column_width, item_size.width);
            tree.set_position(
                node,
                Point::new(
                    x + column_widths[column] / 2.0,
                    y - menu_size.height / 2.0,
                ),
            );

            y -= item_size.height + 10.0;
            rows_occupied += 1;
            if rows_occupied >= column_rows {
                x += column_width + 5.0;
                rows_occupied = 0;
                column_rows = 0;
                column_width = 0.0;
                column += 1;
            }
        }
    }

    fn menu_size(&self, tree: &Tree) -> Size {
        tree.props(self.node()).expect("stale menu node").content_size
    }
}

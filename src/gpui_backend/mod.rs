//! GPUI painter for render lists.
//!
//! Enabled by the `gpui` feature. Call [`paint_render_list`] from a GPUI
//! `canvas` paint callback with the list produced by
//! [`Chart::render`](crate::chart::Chart::render).

mod paint;

pub use paint::paint_render_list;

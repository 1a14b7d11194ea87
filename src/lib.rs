//! fresco — a header illustration widget.
//!
//! The [`Illustration`](widgets::Illustration) widget owns two drawable
//! layers: an illustration scaled to the widget's width and a background
//! filling the area underneath, both drawn behind any hosted children. An
//! optional aspect ratio reserves top padding for the illustration, snapped
//! down to a baseline grid derived from display density.
//!
//! Drawing is recorded into a [`Canvas`](canvas::Canvas) as a list of draw
//! ops; the hosting renderer consumes the ops, and tests inspect them
//! directly.

pub mod canvas;
pub mod drawable;
pub mod image_metadata;
pub mod layout;
pub mod transform;
pub mod widgets;

pub mod prelude {
    pub use crate::canvas::{Canvas, DrawOp};
    pub use crate::drawable::{
        drawable_ref, ColorDrawable, Drawable, DrawableError, DrawableRef, ImageDrawable,
        ImageSource, TileDrawable,
    };
    pub use crate::layout::{gravity, Constraints, Gravity, LayoutDirection, Size};
    pub use crate::transform::Transform;
    pub use crate::widgets::{
        frame, illustration, ChangeFlags, Color, Frame, Illustration, Padding, Rect, Widget,
    };
}

//! Drawable capability surface.
//!
//! A [`Drawable`] is anything that can report an intrinsic size, accept
//! bounds, and record draw ops into a [`Canvas`](crate::canvas::Canvas).
//! References are shared: a [`DrawableRef`] may be held by several widgets at
//! once (the usual way themed assets are reused), so `set_bounds` is a side
//! effect visible to every holder. All access is single-threaded.

mod color;
mod image;
mod tile;

pub use color::ColorDrawable;
pub use image::{ImageDrawable, ImageSource};
pub use tile::TileDrawable;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::canvas::Canvas;
use crate::layout::Size;
use crate::widgets::Rect;

#[derive(Debug, Error)]
pub enum DrawableError {
    /// The image data could not be read.
    #[error("failed to read image data: {0}")]
    Io(#[from] std::io::Error),
    /// The image container could not be parsed far enough to get dimensions.
    #[error("failed to read image dimensions: {0}")]
    Metadata(#[from] ::image::ImageError),
    /// The source declares a zero-area intrinsic size.
    #[error("image declares an empty intrinsic size ({width}x{height})")]
    EmptyIntrinsicSize { width: u32, height: u32 },
}

pub trait Drawable {
    /// Natural size of the content, or `None` for drawables that scale to
    /// whatever bounds they are given (e.g. a solid color).
    fn intrinsic_size(&self) -> Option<Size>;

    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    /// Whether the drawable should be flipped horizontally under
    /// right-to-left layout direction.
    fn is_auto_mirrored(&self) -> bool {
        false
    }

    /// Record this drawable's content into the canvas, within `bounds()`.
    fn draw(&self, canvas: &mut Canvas);
}

/// Shared handle to a drawable. Identity (`Rc::ptr_eq`) is what widgets
/// compare when deciding whether a setter actually changed anything.
pub type DrawableRef = Rc<RefCell<dyn Drawable>>;

/// Wrap a drawable into a shared handle.
pub fn drawable_ref(drawable: impl Drawable + 'static) -> DrawableRef {
    Rc::new(RefCell::new(drawable))
}

/// Identity comparison for optional drawable handles.
pub(crate) fn same_drawable(a: &Option<DrawableRef>, b: &Option<DrawableRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Color;

    #[test]
    fn test_same_drawable_identity() {
        let a = drawable_ref(ColorDrawable::new(Color::BLACK));
        let b = drawable_ref(ColorDrawable::new(Color::BLACK));
        assert!(same_drawable(&Some(a.clone()), &Some(a.clone())));
        assert!(!same_drawable(&Some(a.clone()), &Some(b)));
        assert!(same_drawable(&None, &None));
        assert!(!same_drawable(&Some(a), &None));
    }

    #[test]
    fn test_set_bounds_visible_through_alias() {
        let shared = drawable_ref(ColorDrawable::new(Color::WHITE));
        let alias = shared.clone();
        shared
            .borrow_mut()
            .set_bounds(Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(alias.borrow().bounds(), Rect::new(0.0, 0.0, 40.0, 30.0));
    }
}

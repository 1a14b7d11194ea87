use super::Drawable;
use crate::canvas::Canvas;
use crate::layout::Size;
use crate::widgets::{Color, Rect};

/// A drawable that fills its bounds with a solid color. No intrinsic size.
#[derive(Debug, Clone)]
pub struct ColorDrawable {
    color: Color,
    bounds: Rect,
}

impl ColorDrawable {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            bounds: Rect::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Drawable for ColorDrawable {
    fn intrinsic_size(&self) -> Option<Size> {
        None
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.color.a > 0.0 {
            canvas.draw_rect(self.bounds, self.color);
        }
    }
}

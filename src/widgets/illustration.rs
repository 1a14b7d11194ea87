//! Header illustration widget.
//!
//! Draws an illustration drawable scaled to the width of the widget, with a
//! background drawable filling the rest, both behind any hosted children.
//! When an aspect ratio is set it determines the top inset reserved for the
//! illustration (snapped down to the baseline grid) and the illustration
//! keeps its source aspect ratio; otherwise only the width is stretched.

use crate::canvas::Canvas;
use crate::drawable::{same_drawable, DrawableRef};
use crate::layout::{gravity, Constraints, Gravity, LayoutDirection, Size};

use super::frame::Frame;
use super::impl_dirty_flags;
use super::widget::{ChangeFlags, Padding, Rect, Widget};

/// Baseline grid unit in density-independent units.
const BASELINE_GRID_DP: f32 = 8.0;

pub struct Illustration {
    dirty_flags: ChangeFlags,
    /// Hosts children and carries the reserved top inset as padding.
    frame: Frame,
    aspect_ratio: f32,
    baseline_grid: f32,
    direction: LayoutDirection,
    background: Option<DrawableRef>,
    illustration: Option<DrawableRef>,
    view_bounds: Rect,
    illustration_bounds: Rect,
    scale: f32,
    reserved_top: f32,
    bounds: Rect,
}

impl Illustration {
    pub fn new() -> Self {
        Self {
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            frame: Frame::new(),
            aspect_ratio: 0.0,
            baseline_grid: BASELINE_GRID_DP,
            direction: LayoutDirection::default(),
            background: None,
            illustration: None,
            view_bounds: Rect::default(),
            illustration_bounds: Rect::default(),
            scale: 1.0,
            reserved_top: 0.0,
            bounds: Rect::default(),
        }
    }

    /// Width-to-height ratio of the reserved illustration area. `0.0`
    /// disables the reservation and stretches the illustration by width only.
    pub fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Display density of the hosting surface; the baseline grid the top
    /// inset snaps to is `density * 8`.
    pub fn density(mut self, density: f32) -> Self {
        self.baseline_grid = density * BASELINE_GRID_DP;
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self.frame.set_direction(direction);
        self
    }

    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.frame.push_child(widget, Gravity::default());
        self
    }

    pub fn child_with_gravity(mut self, widget: impl Widget + 'static, gravity: Gravity) -> Self {
        self.frame.push_child(widget, gravity);
        self
    }

    pub fn background(mut self, drawable: DrawableRef) -> Self {
        self.set_background(Some(drawable));
        self
    }

    pub fn illustration(mut self, drawable: DrawableRef) -> Self {
        self.set_illustration(Some(drawable));
        self
    }

    /// Replace the background layer. The background is drawn to fill the area
    /// left under the illustration and is scaled by the same factor so the
    /// two textures stay consistent. Same-reference assignment is a no-op.
    pub fn set_background(&mut self, drawable: Option<DrawableRef>) {
        if same_drawable(&self.background, &drawable) {
            return;
        }
        self.background = drawable;
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// Replace the illustration layer. The drawable is expected to declare an
    /// intrinsic size and is scaled to the width of the widget. Same-reference
    /// assignment is a no-op.
    pub fn set_illustration(&mut self, drawable: Option<DrawableRef>) {
        if same_drawable(&self.illustration, &drawable) {
            return;
        }
        self.illustration = drawable;
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    #[deprecated(since = "0.1.0", note = "use `set_illustration`")]
    pub fn set_foreground(&mut self, drawable: Option<DrawableRef>) {
        self.set_illustration(drawable);
    }

    /// Width scale applied to both layers; `1.0` until an aspect ratio and an
    /// illustration produce one.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Placement of the illustration within the widget, as of the last layout.
    pub fn illustration_bounds(&self) -> Rect {
        self.illustration_bounds
    }

    /// Top inset reserved for the illustration, as of the last layout.
    pub fn top_inset(&self) -> f32 {
        self.reserved_top
    }
}

impl Default for Illustration {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Illustration {
    fn layout(&mut self, constraints: Constraints) -> Size {
        if self.aspect_ratio != 0.0 {
            let mut reserved = (constraints.available_width() / self.aspect_ratio).floor();
            // Snap down to the baseline grid so content below starts on it
            if self.baseline_grid > 0.0 {
                reserved -= reserved % self.baseline_grid;
            }
            self.reserved_top = reserved;
            self.frame.set_padding(Padding::default().top(reserved));
        }

        let size = self.frame.layout(constraints);
        self.view_bounds = Rect::from_size(size);

        if let Some(illustration) = &self.illustration {
            let intrinsic = illustration
                .borrow()
                .intrinsic_size()
                .unwrap_or_default();
            let mut box_size = intrinsic;
            if self.aspect_ratio != 0.0 {
                // Precondition inherited from the drawable contract: an
                // illustration used with an aspect ratio declares a positive
                // intrinsic width.
                debug_assert!(
                    intrinsic.width > 0.0,
                    "illustration drawable has no intrinsic width"
                );
                self.scale = size.width / intrinsic.width;
                box_size.width = size.width;
                box_size.height = (intrinsic.height * self.scale).floor();
            }
            self.illustration_bounds = gravity::apply(
                Gravity::FILL_HORIZONTAL | Gravity::TOP,
                box_size,
                self.view_bounds,
                self.direction,
            );
            illustration.borrow_mut().set_bounds(self.illustration_bounds);
        }

        if let Some(background) = &self.background {
            // Pre-scale the background bounds to compensate for the canvas
            // scale applied in paint
            background.borrow_mut().set_bounds(Rect::new(
                0.0,
                0.0,
                (size.width / self.scale).ceil(),
                ((size.height - self.illustration_bounds.height) / self.scale).ceil(),
            ));
        }

        log::trace!(
            "illustration layout: {}x{} scale {} inset {}",
            size.width,
            size.height,
            self.scale,
            self.reserved_top
        );

        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
        self.frame.set_origin(x, y);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.save();
        // Output shape follows the final view bounds
        canvas.clip_rect(self.bounds);

        canvas.save();
        canvas.translate(self.bounds.x, self.bounds.y);

        if let Some(background) = &self.background {
            let background = background.borrow();
            canvas.save();
            // Start below the illustration and match its texture scale
            canvas.translate(0.0, self.illustration_bounds.height);
            canvas.scale(self.scale, self.scale);
            if self.direction.is_rtl() && background.is_auto_mirrored() {
                canvas.scale(-1.0, 1.0);
                canvas.translate(-background.bounds().width, 0.0);
            }
            background.draw(canvas);
            canvas.restore();
        }

        if let Some(illustration) = &self.illustration {
            let illustration = illustration.borrow();
            canvas.save();
            if self.direction.is_rtl() && illustration.is_auto_mirrored() {
                canvas.scale(-1.0, 1.0);
                canvas.translate(-self.illustration_bounds.width, 0.0);
            }
            illustration.draw(canvas);
            canvas.restore();
        }

        canvas.restore();

        // Children draw above both layers
        self.frame.paint(canvas);

        canvas.restore();
    }

    impl_dirty_flags!();
}

/// Create an illustration widget with no layers set.
pub fn illustration() -> Illustration {
    Illustration::new()
}

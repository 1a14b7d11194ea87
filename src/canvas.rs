//! Draw-op recording canvas.
//!
//! Widgets and drawables paint by recording ops; a host renderer (or a test)
//! consumes the op list afterwards. Each op is stamped with the transform and
//! clip that were current when it was recorded, so transform state never has
//! to be replayed to interpret the output.

use crate::drawable::ImageSource;
use crate::transform::Transform;
use crate::widgets::{Color, Rect};

/// A single recorded draw operation.
///
/// `rect` is in the coordinate space the op was recorded in; `transform` maps
/// it to device space. `clip` is the device-space clip active at record time,
/// `None` when unclipped.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Color,
        transform: Transform,
        clip: Option<Rect>,
    },
    Image {
        source: ImageSource,
        rect: Rect,
        transform: Transform,
        clip: Option<Rect>,
    },
}

impl DrawOp {
    /// The transform the op was recorded under.
    pub fn transform(&self) -> &Transform {
        match self {
            DrawOp::Rect { transform, .. } | DrawOp::Image { transform, .. } => transform,
        }
    }

    /// Device-space bounds of this op.
    pub fn device_rect(&self) -> Rect {
        match self {
            DrawOp::Rect {
                rect, transform, ..
            }
            | DrawOp::Image {
                rect, transform, ..
            } => transform.map_rect(*rect),
        }
    }

    pub fn clip(&self) -> Option<Rect> {
        match self {
            DrawOp::Rect { clip, .. } | DrawOp::Image { clip, .. } => *clip,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CanvasState {
    transform: Transform,
    clip: Option<Rect>,
}

impl CanvasState {
    fn base() -> Self {
        Self {
            transform: Transform::IDENTITY,
            clip: None,
        }
    }
}

pub struct Canvas {
    ops: Vec<DrawOp>,
    state: CanvasState,
    saved: Vec<CanvasState>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            state: CanvasState::base(),
            saved: Vec::with_capacity(4),
        }
    }

    /// Clear recorded ops and state for reuse, preserving allocated capacity.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.saved.clear();
        self.state = CanvasState::base();
    }

    /// Push the current transform and clip onto the save stack.
    pub fn save(&mut self) {
        self.saved.push(self.state);
    }

    /// Pop back to the most recently saved state.
    ///
    /// Every `restore` must pair with an earlier `save`.
    pub fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "canvas restore without save");
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    /// Concatenate a translation onto the current transform.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.then(&Transform::translation(dx, dy));
    }

    /// Concatenate a scale onto the current transform. Negative factors
    /// mirror.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.then(&Transform::scaling(sx, sy));
    }

    /// Intersect the clip with `rect` (given in the current coordinate
    /// space). An empty intersection leaves a zero-area clip, not an error.
    pub fn clip_rect(&mut self, rect: Rect) {
        let device = self.state.transform.map_rect(rect);
        self.state.clip = Some(match self.state.clip {
            Some(existing) => existing
                .intersection(&device)
                .unwrap_or(Rect::new(device.x, device.y, 0.0, 0.0)),
            None => device,
        });
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect {
            rect,
            color,
            transform: self.state.transform,
            clip: self.state.clip,
        });
    }

    pub fn draw_image(&mut self, source: ImageSource, rect: Rect) {
        self.ops.push(DrawOp::Image {
            source,
            rect,
            transform: self.state.transform,
            clip: self.state.clip,
        });
    }

    /// The transform that will stamp the next recorded op.
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// The device-space clip that will stamp the next recorded op.
    pub fn clip(&self) -> Option<Rect> {
        self.state.clip
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

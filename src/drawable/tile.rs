use super::{Drawable, DrawableError, ImageSource};
use crate::canvas::Canvas;
use crate::image_metadata;
use crate::layout::Size;
use crate::widgets::Rect;

/// A drawable that repeats a raster tile across its bounds, the usual
/// texture for the area below a header illustration.
///
/// Partial tiles at the right and bottom edges are handled by clipping to the
/// bounds rather than by resizing the edge tiles, so the texture period stays
/// constant.
#[derive(Debug, Clone)]
pub struct TileDrawable {
    source: ImageSource,
    tile: Size,
    bounds: Rect,
    auto_mirrored: bool,
}

impl TileDrawable {
    /// Create from a source, probing the container header for the tile size.
    pub fn from_source(source: impl Into<ImageSource>) -> Result<Self, DrawableError> {
        let source = source.into();
        let (width, height) = image_metadata::intrinsic_size(&source)?;
        if width == 0 || height == 0 {
            return Err(DrawableError::EmptyIntrinsicSize { width, height });
        }
        Ok(Self::with_tile_size(
            source,
            Size::new(width as f32, height as f32),
        ))
    }

    /// Create with a tile size that is already known, skipping the probe.
    pub fn with_tile_size(source: impl Into<ImageSource>, tile: Size) -> Self {
        Self {
            source: source.into(),
            tile,
            bounds: Rect::default(),
            auto_mirrored: false,
        }
    }

    /// Mark this drawable as flippable under right-to-left layout direction.
    pub fn auto_mirrored(mut self, mirrored: bool) -> Self {
        self.auto_mirrored = mirrored;
        self
    }

    pub fn tile_size(&self) -> Size {
        self.tile
    }
}

impl Drawable for TileDrawable {
    fn intrinsic_size(&self) -> Option<Size> {
        Some(self.tile)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn is_auto_mirrored(&self) -> bool {
        self.auto_mirrored
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.bounds.size().is_empty() || self.tile.is_empty() {
            return;
        }
        canvas.save();
        canvas.clip_rect(self.bounds);
        let mut y = self.bounds.y;
        while y < self.bounds.bottom() {
            let mut x = self.bounds.x;
            while x < self.bounds.right() {
                canvas.draw_image(
                    self.source.clone(),
                    Rect::new(x, y, self.tile.width, self.tile.height),
                );
                x += self.tile.width;
            }
            y += self.tile.height;
        }
        canvas.restore();
    }
}

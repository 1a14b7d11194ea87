use std::path::PathBuf;
use std::sync::Arc;

use super::{Drawable, DrawableError};
use crate::canvas::Canvas;
use crate::image_metadata;
use crate::layout::Size;
use crate::widgets::Rect;

/// Source for a raster image - a file path or in-memory bytes.
///
/// The bytes are never decoded here; only the container header is read to
/// learn intrinsic dimensions. Rasterization is the host renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

/// A drawable backed by a raster image reference, drawn stretched to its
/// bounds.
#[derive(Debug, Clone)]
pub struct ImageDrawable {
    source: ImageSource,
    intrinsic: Size,
    bounds: Rect,
    auto_mirrored: bool,
}

impl ImageDrawable {
    /// Create from a source, probing the container header for intrinsic
    /// dimensions.
    pub fn from_source(source: impl Into<ImageSource>) -> Result<Self, DrawableError> {
        let source = source.into();
        let (width, height) = image_metadata::intrinsic_size(&source)?;
        if width == 0 || height == 0 {
            return Err(DrawableError::EmptyIntrinsicSize { width, height });
        }
        Ok(Self::with_size(
            source,
            Size::new(width as f32, height as f32),
        ))
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DrawableError> {
        Self::from_source(ImageSource::Path(path.into()))
    }

    /// Create with dimensions that are already known, skipping the probe.
    pub fn with_size(source: impl Into<ImageSource>, intrinsic: Size) -> Self {
        Self {
            source: source.into(),
            intrinsic,
            bounds: Rect::default(),
            auto_mirrored: false,
        }
    }

    /// Mark this drawable as flippable under right-to-left layout direction.
    pub fn auto_mirrored(mut self, mirrored: bool) -> Self {
        self.auto_mirrored = mirrored;
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }
}

impl Drawable for ImageDrawable {
    fn intrinsic_size(&self) -> Option<Size> {
        Some(self.intrinsic)
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
        if self.bounds.size().is_empty() {
            return;
        }
        canvas.draw_image(self.source.clone(), self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;

    #[test]
    fn test_with_size_reports_intrinsic() {
        let drawable = ImageDrawable::with_size("header.png", Size::new(100.0, 50.0));
        assert_eq!(drawable.intrinsic_size(), Some(Size::new(100.0, 50.0)));
        assert!(!drawable.is_auto_mirrored());
    }

    #[test]
    fn test_auto_mirrored_builder() {
        let drawable =
            ImageDrawable::with_size("header.png", Size::new(100.0, 50.0)).auto_mirrored(true);
        assert!(drawable.is_auto_mirrored());
    }

    #[test]
    fn test_draw_records_image_op() {
        let mut drawable = ImageDrawable::with_size("header.png", Size::new(100.0, 50.0));
        drawable.set_bounds(Rect::new(0.0, 0.0, 300.0, 150.0));

        let mut canvas = Canvas::new();
        drawable.draw(&mut canvas);

        assert_eq!(canvas.ops().len(), 1);
        match &canvas.ops()[0] {
            DrawOp::Image { source, rect, .. } => {
                assert_eq!(*source, ImageSource::from("header.png"));
                assert_eq!(*rect, Rect::new(0.0, 0.0, 300.0, 150.0));
            }
            other => panic!("unexpected op: {other:?}"),
        }
    }

    #[test]
    fn test_empty_bounds_draw_nothing() {
        let drawable = ImageDrawable::with_size("header.png", Size::new(100.0, 50.0));
        let mut canvas = Canvas::new();
        drawable.draw(&mut canvas);
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_from_source_probes_bytes() {
        // 1x1 PNG, header only needs to be parseable for dimensions
        const PNG: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
            0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];
        let source = ImageSource::Bytes(Arc::from(PNG));
        let drawable = ImageDrawable::from_source(source).unwrap();
        assert_eq!(drawable.intrinsic_size(), Some(Size::new(1.0, 1.0)));
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let err = ImageDrawable::from_path("definitely/not/here.png");
        assert!(err.is_err());
    }
}

//! Image metadata utilities for determining intrinsic dimensions.
//!
//! Only the container header is parsed; pixel data is never decoded. Layout
//! needs the natural size of a drawable long before the host renderer ever
//! touches the pixels.

use std::io::Cursor;

use crate::drawable::{DrawableError, ImageSource};

/// Get the intrinsic dimensions of an image source without decoding it.
pub fn intrinsic_size(source: &ImageSource) -> Result<(u32, u32), DrawableError> {
    match source {
        ImageSource::Path(path) => Ok(image::image_dimensions(path)?),
        ImageSource::Bytes(bytes) => {
            let reader = image::ImageReader::new(Cursor::new(bytes.as_ref()))
                .with_guessed_format()?;
            Ok(reader.into_dimensions()?)
        }
    }
}

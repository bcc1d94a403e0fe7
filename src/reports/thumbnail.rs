use crate::error::ImageError;
use crate::graph::{GraphClient, redact};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Bounding box, in pixels, that embedded thumbnails are scaled down to.
pub const THUMBNAIL_BOX: u32 = 100;

/// A downscaled thumbnail, re-encoded as PNG
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub url: String,
    pub png: Vec<u8>,
}

/// Download the image at `url` and prepare it for embedding.
pub async fn fetch(client: &GraphClient, url: &str) -> Result<Thumbnail, ImageError> {
    let bytes = client.get_bytes(url).await.map_err(|source| ImageError::Download {
        url: redact(url),
        source,
    })?;

    prepare(url, &bytes)
}

/// Decode `bytes`, shrink the image to fit [`THUMBNAIL_BOX`] keeping its aspect ratio, and encode it as PNG.
///
/// Images already inside the box keep their size.
pub fn prepare(url: &str, bytes: &[u8]) -> Result<Thumbnail, ImageError> {
    let decode_error = |source| ImageError::Decode {
        url: redact(url),
        source,
    };

    let img = image::load_from_memory(bytes).map_err(decode_error)?;
    let img = if img.width() > THUMBNAIL_BOX || img.height() > THUMBNAIL_BOX {
        img.thumbnail(THUMBNAIL_BOX, THUMBNAIL_BOX)
    } else {
        img
    };

    let png = encode_png(&img).map_err(decode_error)?;
    Ok(Thumbnail { url: url.to_string(), png })
}

fn encode_png(img: &DynamicImage) -> image::ImageResult<Vec<u8>> {
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

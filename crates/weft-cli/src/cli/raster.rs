//! Raster output: rasterize the SVG document with resvg and save it
//! with `image`.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Rasterize an SVG document to an RGBA image of the given size.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<RgbaImage> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).context("failed to parse generated SVG")?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("cannot allocate a {}x{} pixmap", width, height))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| anyhow!("pixmap size does not match {}x{}", width, height))
}

/// Save an image, picking the encoder from the file extension.
///
/// The canvas is opaque, so formats without alpha get the RGB channels.
pub fn save_image(image: RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("unknown image format for {}", path.display()))?;

    let image = DynamicImage::ImageRgba8(image);
    let image = match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Tiff => image,
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    };

    image
        .save_with_format(path, format)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}

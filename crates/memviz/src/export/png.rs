//! PNG output via usvg/resvg.
//!
//! The scene's SVG text is parsed back into a `usvg::Tree` with the system
//! font database loaded (text is still live in the SVG and gets shaped
//! here), then rasterized into a tiny-skia pixmap at the configured scale
//! and encoded as PNG.

use std::{fs, path::Path};

use log::{debug, info};
use resvg::{tiny_skia, usvg};

use crate::{config::RasterConfig, error::MemvizError};

/// Rasterizes SVG text into PNG bytes.
pub fn rasterize(svg_text: &str, raster: &RasterConfig) -> Result<Vec<u8>, MemvizError> {
    let scale = raster.scale();

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg_text, &options)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    debug!(width = width, height = height; "Rasterizing SVG");

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        MemvizError::Raster(format!("failed to allocate a {width}x{height} pixmap"))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| MemvizError::Raster(err.to_string()))
}

/// Rasterizes SVG text and writes the PNG to the given path.
pub fn write_png(
    svg_text: &str,
    raster: &RasterConfig,
    path: impl AsRef<Path>,
) -> Result<(), MemvizError> {
    let path = path.as_ref();
    let png = rasterize(svg_text, raster)?;
    fs::write(path, png)?;
    info!(path = path.display().to_string(); "PNG exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 80" width="100" height="80">
<rect width="100" height="80" fill="white"/>
<rect x="10" y="10" width="80" height="60" fill="#FFB74D" stroke="#E65100"/>
</svg>"##;

    #[test]
    fn test_rasterize_produces_png_bytes() {
        let png = rasterize(SAMPLE_SVG, &RasterConfig::default()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_scale_multiplies_pixel_dimensions() {
        // Default scale is 1.5: a 100x80 canvas becomes 150x120 pixels.
        let png = rasterize(SAMPLE_SVG, &RasterConfig::default()).unwrap();

        // PNG IHDR: width at bytes 16..20, height at 20..24, big-endian.
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        assert_eq!(width, 150);
        assert_eq!(height, 120);
    }

    #[test]
    fn test_invalid_svg_is_rejected() {
        let result = rasterize("this is not svg", &RasterConfig::default());
        assert!(matches!(result, Err(MemvizError::Svg(_))));
    }

    #[test]
    fn test_write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        write_png(SAMPLE_SVG, &RasterConfig::default(), &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(!written.is_empty());
    }
}

use crate::mappings::IconMapping;
use image::RgbaImage;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("icon square at ({x};{y}), {size}px, exceeds the {width}x{height} sheet")]
    OutOfBounds {
        x: u32,
        y: u32,
        size: u32,
        width: u32,
        height: u32,
    },
}

/// Copies one icon's square out of its sheet into a new, independently owned
/// image of exactly `icon_size` × `icon_size` pixels, alpha included.
///
/// Mapping offsets are top-left-origin, which is also the `image` crate's
/// convention, so the offsets are used as-is. A host whose pixel rows start
/// at the bottom-left reads the same square at `height - y - icon_size`; do
/// not apply that conversion here on top.
pub fn extract_icon(
    sheet: &RgbaImage,
    icon: &IconMapping,
    icon_size: u32,
) -> Result<RgbaImage, ExtractError> {
    let (width, height) = sheet.dimensions();

    let in_bounds = u64::from(icon.x) + u64::from(icon_size) <= u64::from(width)
        && u64::from(icon.y) + u64::from(icon_size) <= u64::from(height);
    if !in_bounds {
        return Err(ExtractError::OutOfBounds {
            x: icon.x,
            y: icon.y,
            size: icon_size,
            width,
            height,
        });
    }

    Ok(image::imageops::crop_imm(sheet, icon.x, icon.y, icon_size, icon_size).to_image())
}

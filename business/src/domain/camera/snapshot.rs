use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::domain::image::sources::ImageFile;

use super::errors::CameraError;
use super::model::VideoFrame;

pub const SNAPSHOT_FILE_NAME: &str = "snapshot.jpg";
pub const SNAPSHOT_MIME_TYPE: &str = "image/jpeg";
pub const SNAPSHOT_JPEG_QUALITY: u8 = 95;

/// Rasterises `frame` onto a surface of the stream's native size and encodes it
/// as a JPEG still.
pub fn encode_snapshot(frame: VideoFrame, native: (u32, u32)) -> Result<ImageFile, CameraError> {
    let (width, height) = native;
    if width == 0 || height == 0 {
        return Err(CameraError::CaptureFailed(
            "stream reported an empty resolution".to_string(),
        ));
    }

    let (frame_width, frame_height) = (frame.width, frame.height);
    let raster = RgbaImage::from_raw(frame_width, frame_height, frame.pixels).ok_or_else(|| {
        CameraError::CaptureFailed(format!(
            "frame buffer does not match {}x{}",
            frame_width, frame_height
        ))
    })?;

    let raster = if raster.dimensions() == (width, height) {
        raster
    } else {
        image::imageops::resize(&raster, width, height, FilterType::Triangle)
    };

    let rgb = DynamicImage::ImageRgba8(raster).to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, SNAPSHOT_JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;

    Ok(ImageFile::new(SNAPSHOT_FILE_NAME, SNAPSHOT_MIME_TYPE, bytes))
}

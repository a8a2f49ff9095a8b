// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use thiserror::Error;

const JPEG_QUALITY: u8 = 75;

/// 封面图片处理错误
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is empty")]
    EmptyData,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

/// 模糊半径 = floor(max(宽, 高) * 强度 / 10)
pub fn blur_radius(width: u32, height: u32, level: f32) -> u32 {
    if level <= 0.0 {
        return 0;
    }
    (width.max(height) as f32 * level / 10.0).floor() as u32
}

/// 对图片做模糊处理并重新编码为 JPEG
///
/// 半径为 0 时不做模糊，但仍会重新编码。透明通道会被丢弃
pub fn apply_mosaic(bytes: &[u8], level: f32) -> Result<Vec<u8>, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    let image =
        image::load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let radius = blur_radius(image.width(), image.height(), level);
    let image = if radius > 0 {
        image.fast_blur(radius as f32)
    } else {
        image
    };

    encode_jpeg(&image)
}

fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    // JPEG 不支持透明通道
    let rgb = image.to_rgb8();

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;
    Ok(encoded)
}

/// 强度大于 0 时先模糊再编码，否则直接对原始字节做 base64
pub fn prepare_cover(bytes: &[u8], level: f32) -> Result<String, ImageError> {
    if level > 0.0 {
        let processed = apply_mosaic(bytes, level)?;
        Ok(encode_base64(&processed))
    } else {
        Ok(encode_base64(bytes))
    }
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Raster helpers for the avatar bitmap and painted color ramps.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use image::RgbaImage;
use image::imageops::FilterType;

/// Decode an image file and prepare it as a circular avatar of `side`×`side` pixels.
///
/// The source is scaled so it covers the whole square while keeping its aspect
/// ratio, centered, and cropped to the square (crop-to-fill). Pixels outside the
/// inscribed circle become transparent with an anti-aliased edge.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or decoded.
///
/// # Examples
///
/// ```rust,ignore
/// use std::path::Path;
/// let avatar = profilecard::utils::load_avatar_image(Path::new("images/profile.png"), 112)?;
/// assert_eq!(avatar.size, [112, 112]);
/// ```
pub fn load_avatar_image(path: &Path, side: u32) -> Result<egui::ColorImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode avatar image: {:?}", path))?;
    let mut square = decoded
        .resize_to_fill(side, side, FilterType::Lanczos3)
        .to_rgba8();
    apply_circle_mask(&mut square);

    let size = [square.width() as usize, square.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        &square.into_raw(),
    ))
}

/// Fade out every pixel outside the circle inscribed in the image.
fn apply_circle_mask(img: &mut RgbaImage) {
    let radius = img.width().min(img.height()) as f32 / 2.0;
    let cx = img.width() as f32 / 2.0;
    let cy = img.height() as f32 / 2.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        // One pixel wide ramp across the rim.
        let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
        pixel.0[3] = (pixel.0[3] as f32 * coverage).round() as u8;
    }
}

/// Linear blend between two colors, channel by channel, `t` in `0.0..=1.0`.
pub fn lerp_color(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    egui::Color32::from_rgba_unmultiplied(
        egui::lerp(from.r() as f32..=to.r() as f32, t).round() as u8,
        egui::lerp(from.g() as f32..=to.g() as f32, t).round() as u8,
        egui::lerp(from.b() as f32..=to.b() as f32, t).round() as u8,
        egui::lerp(from.a() as f32..=to.a() as f32, t).round() as u8,
    )
}

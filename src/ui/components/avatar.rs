// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Avatar source resolution: a profile picture from disk or fallback initials.

use std::path::Path;

use eframe::egui;

use crate::ui::theme;
use crate::utils::load_avatar_image;

/// Conventional location of the profile picture, relative to the working directory.
pub const AVATAR_PATH: &str = "images/profile.png";

/// What the avatar frame shows. Exactly one variant is chosen per run.
#[derive(Clone)]
pub enum AvatarContent {
    /// Circle-clipped bitmap; a 0×0 image when the file existed but was unreadable.
    Image(egui::ColorImage),
    /// Placeholder letters.
    Initials(String),
}

impl std::fmt::Debug for AvatarContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(img) => write!(f, "Image({}x{})", img.size[0], img.size[1]),
            Self::Initials(text) => f.debug_tuple("Initials").field(text).finish(),
        }
    }
}

/// Pick the avatar content for `path`.
///
/// A missing file falls back to `initials`. A file that exists but fails to
/// decode still counts as an image (an empty one), so nothing is drawn in
/// the frame rather than the placeholder.
pub fn resolve_avatar(path: &Path, initials: &str) -> AvatarContent {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no avatar image, using initials");
        return AvatarContent::Initials(initials.to_owned());
    }

    match load_avatar_image(path, theme::AVATAR_IMAGE) {
        Ok(image) => {
            tracing::debug!(path = %path.display(), "avatar image loaded");
            AvatarContent::Image(image)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "avatar image unreadable: {err:#}");
            AvatarContent::Image(egui::ColorImage::from_rgba_unmultiplied([0, 0], &[]))
        }
    }
}

/// Render-ready avatar, built once when the window is created.
pub enum AvatarView {
    Texture(egui::TextureHandle),
    /// The image variant without any pixels to show.
    Blank,
    Initials(String),
}

impl AvatarView {
    /// Upload the bitmap (if any) to the GPU with smooth sampling.
    pub fn load(ctx: &egui::Context, content: AvatarContent) -> Self {
        match content {
            AvatarContent::Image(image) if image.size[0] == 0 || image.size[1] == 0 => {
                Self::Blank
            }
            AvatarContent::Image(image) => Self::Texture(ctx.load_texture(
                "avatar",
                image,
                egui::TextureOptions::LINEAR,
            )),
            AvatarContent::Initials(text) => Self::Initials(text),
        }
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the UI components.

pub mod imaging;

/// Decode, crop-to-fill, and circle-clip an avatar bitmap.
pub use imaging::load_avatar_image;
/// Blend two colors linearly.
pub use imaging::lerp_color;

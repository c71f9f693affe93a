// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Typed look-and-feel of the card: colors, text styles, and fixed geometry.

use egui::{Align, Color32};

pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const PANEL_BACKGROUND: Color32 = Color32::WHITE;

/// Header gradient start (top-left corner).
pub const GRADIENT_START: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
/// Header gradient end (bottom-right corner).
pub const GRADIENT_END: Color32 = Color32::from_rgb(0x76, 0x4b, 0xa2);

pub const HEADING_COLOR: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const BODY_COLOR: Color32 = Color32::from_rgb(0x34, 0x49, 0x5e);
pub const MUTED_COLOR: Color32 = Color32::from_rgb(0x7f, 0x8c, 0x8d);
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
pub const SEPARATOR_COLOR: Color32 = Color32::from_rgb(0xec, 0xf0, 0xf1);

pub const HEADER_HEIGHT: f32 = 200.0;
/// Outer diameter of the round avatar frame.
pub const AVATAR_FRAME: f32 = 120.0;
pub const AVATAR_BORDER: f32 = 4.0;
/// Edge length of the avatar bitmap inside the frame.
pub const AVATAR_IMAGE: u32 = 112;
pub const AVATAR_FRAME_FILL: Color32 = Color32::WHITE;

/// Content panel margins: horizontal, vertical.
pub const CONTENT_MARGIN: (i8, i8) = (30, 20);
pub const CONTENT_SPACING: f32 = 15.0;
pub const SEPARATOR_THICKNESS: f32 = 1.0;
/// Gap between a section label and its body.
pub const SECTION_SPACING: f32 = 8.0;
/// Gap between the lines of one experience entry.
pub const ENTRY_SPACING: f32 = 2.0;
/// Extra gap above every experience entry after the first.
pub const ENTRY_TOP_MARGIN: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Style of one text element on the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color32,
    pub weight: FontWeight,
    pub align: Align,
    /// Break long text onto multiple lines instead of clipping.
    pub wrap: bool,
    /// Line height as a multiple of the font size, `None` for the font default.
    pub line_height: Option<f32>,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl TextStyle {
    const fn plain(size: f32, color: Color32) -> Self {
        Self {
            size,
            color,
            weight: FontWeight::Regular,
            align: Align::Min,
            wrap: false,
            line_height: None,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    const fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }

    const fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }
}

pub const NAME: TextStyle = TextStyle {
    margin_top: 10.0,
    ..TextStyle::plain(24.0, HEADING_COLOR).bold().centered()
};

pub const SUBTITLE: TextStyle = TextStyle {
    margin_bottom: 20.0,
    ..TextStyle::plain(16.0, MUTED_COLOR).centered()
};

pub const SECTION_LABEL: TextStyle = TextStyle::plain(16.0, HEADING_COLOR).bold();

pub const SECTION_BODY: TextStyle = TextStyle {
    wrap: true,
    line_height: Some(1.4),
    ..TextStyle::plain(14.0, BODY_COLOR)
};

pub const ENTRY_ROLE: TextStyle = TextStyle::plain(14.0, HEADING_COLOR).bold();
pub const ENTRY_ORGANIZATION: TextStyle = TextStyle::plain(13.0, ACCENT_COLOR);
pub const ENTRY_PERIOD: TextStyle = TextStyle::plain(12.0, MUTED_COLOR);

/// Fallback initials inside the avatar frame.
pub const INITIALS: TextStyle = TextStyle::plain(24.0, GRADIENT_START).bold().centered();

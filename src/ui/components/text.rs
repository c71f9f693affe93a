// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Text and rule widgets driven by the typed theme styles.

use egui::text::{LayoutJob, TextFormat};
use egui::{FontId, Sense};

use crate::ui::theme::{self, FontWeight, TextStyle};

/// Horizontal offset of the second pass used to thicken bold text.
const FAUX_BOLD_OFFSET: f32 = 0.6;

/// A block of text laid out and painted according to a [`TextStyle`].
pub struct StyledText<'a> {
    text: &'a str,
    style: TextStyle,
}

impl<'a> StyledText<'a> {
    pub fn new(text: &'a str, style: TextStyle) -> Self {
        Self { text, style }
    }
}

impl egui::Widget for StyledText<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let style = self.style;
        let width = ui.available_width();

        let mut job = LayoutJob::single_section(
            self.text.to_owned(),
            TextFormat {
                font_id: FontId::proportional(style.size),
                color: style.color,
                line_height: style.line_height.map(|factor| factor * style.size),
                ..Default::default()
            },
        );
        job.wrap.max_width = if style.wrap { width } else { f32::INFINITY };
        job.halign = style.align;
        let galley = ui.painter().layout_job(job);

        let desired = egui::vec2(
            width,
            style.margin_top + galley.size().y + style.margin_bottom,
        );
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            let x = match style.align {
                egui::Align::Min => rect.left(),
                egui::Align::Center => rect.center().x,
                egui::Align::Max => rect.right(),
            };
            let pos = egui::pos2(x, rect.top() + style.margin_top);
            let painter = ui.painter();
            painter.galley(pos, galley.clone(), style.color);
            // egui's bundled fonts ship no bold face.
            if style.weight == FontWeight::Bold {
                painter.galley(pos + egui::vec2(FAUX_BOLD_OFFSET, 0.0), galley, style.color);
            }
        }

        response
    }
}

/// Thin full-width horizontal rule.
pub fn separator(ui: &mut egui::Ui) -> egui::Response {
    let desired = egui::vec2(ui.available_width(), theme::SEPARATOR_THICKNESS);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 0.0, theme::SEPARATOR_COLOR);
    }
    response
}

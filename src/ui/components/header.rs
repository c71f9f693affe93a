// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Gradient header band with the round avatar frame centered in it.

use eframe::egui::{self, Color32, Rect, Sense, epaint::Mesh};

use crate::ui::components::avatar::AvatarView;
use crate::ui::components::text::StyledText;
use crate::ui::theme;
use crate::utils::lerp_color;

/// Corner colors of a diagonal two-stop gradient: top-left, top-right, bottom-right, bottom-left.
///
/// The ramp runs from the top-left corner to the bottom-right one, so the two
/// remaining corners sit halfway along it.
pub fn diagonal_corners(start: Color32, end: Color32) -> [Color32; 4] {
    let mid = lerp_color(start, end, 0.5);
    [start, mid, end, mid]
}

/// Fill `rect` with a diagonal gradient as a two-triangle mesh.
fn paint_gradient(painter: &egui::Painter, rect: Rect, start: Color32, end: Color32) {
    let [tl, tr, br, bl] = diagonal_corners(start, end);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), tl);
    mesh.colored_vertex(rect.right_top(), tr);
    mesh.colored_vertex(rect.right_bottom(), br);
    mesh.colored_vertex(rect.left_bottom(), bl);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Render the header across the full available width.
pub fn view(ui: &mut egui::Ui, avatar: &AvatarView) {
    let desired = egui::vec2(ui.available_width(), theme::HEADER_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    paint_gradient(ui.painter(), rect, theme::GRADIENT_START, theme::GRADIENT_END);

    let center = rect.center();
    let radius = theme::AVATAR_FRAME / 2.0;
    // Stroke is centered on the path; keep the border inside the frame.
    ui.painter().circle(
        center,
        radius - theme::AVATAR_BORDER / 2.0,
        theme::AVATAR_FRAME_FILL,
        egui::Stroke::new(theme::AVATAR_BORDER, Color32::WHITE),
    );

    let inner = Rect::from_center_size(center, egui::Vec2::splat(theme::AVATAR_IMAGE as f32));
    match avatar {
        AvatarView::Texture(texture) => {
            ui.painter().image(
                texture.id(),
                inner,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        AvatarView::Blank => {}
        AvatarView::Initials(text) => {
            // `put` centers the allocation inside the frame on both axes.
            ui.put(inner, StyledText::new(text, theme::INITIALS));
        }
    }
}

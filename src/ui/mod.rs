// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the profile card.
//! Owns the resolved avatar and the content layout, both built once.

pub mod components;
pub mod theme;

use std::path::Path;

use eframe::egui;

use crate::models::profile::ProfileInfo;
use crate::ui::components::avatar::{AvatarView, resolve_avatar};
use crate::ui::components::content::{self, ContentBlock, content_blocks};
use crate::ui::components::header;

/// The profile window: a gradient header over a white content panel.
pub struct ProfileApp {
    avatar: AvatarView,
    blocks: Vec<ContentBlock<'static>>,
}

impl ProfileApp {
    /// Resolve the avatar at `avatar_path` and lay out `profile`.
    ///
    /// The avatar file is checked and read exactly once, here.
    pub fn new(ctx: &egui::Context, profile: &'static ProfileInfo, avatar_path: &Path) -> Self {
        let avatar = resolve_avatar(avatar_path, &profile.initials());
        Self {
            avatar: AvatarView::load(ctx, avatar),
            blocks: content_blocks(profile),
        }
    }

    /// Paint the card into the central panel of `ctx`.
    fn show(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::WINDOW_BACKGROUND))
            .show(ctx, |ui| {
                // Header and panel sit flush against each other.
                ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
                header::view(ui, &self.avatar);
                content::view(ui, &self.blocks);
            });
    }
}

impl eframe::App for ProfileApp {
    /// Paint the static card. Nothing here mutates state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    /// Required by eframe 0.34; painting happens in `update`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

#[cfg(test)]
mod tests {
    use eframe::egui;
    use image::{ImageBuffer, Rgba};
    use tempfile::TempDir;

    use super::ProfileApp;
    use crate::models::profile::PROFILE;
    use crate::ui::components::avatar::AvatarView;
    use crate::ui::theme;

    struct PaintedText {
        text: String,
        pos: egui::Pos2,
        size: egui::Vec2,
        bounds: egui::Rect,
    }

    /// Run one frame at the window size and return the flattened shape list.
    fn render(ctx: &egui::Context, app: &ProfileApp) -> Vec<egui::Shape> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(400.0, 650.0),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| app.show(ctx));

        let mut shapes = Vec::new();
        for clipped in output.shapes {
            flatten(clipped.shape, &mut shapes);
        }
        shapes
    }

    fn flatten(shape: egui::Shape, out: &mut Vec<egui::Shape>) {
        match shape {
            egui::Shape::Vec(inner) => {
                for s in inner {
                    flatten(s, out);
                }
            }
            other => out.push(other),
        }
    }

    fn painted_texts(shapes: &[egui::Shape]) -> Vec<PaintedText> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Text(text) => Some(PaintedText {
                    text: text.galley.text().to_owned(),
                    pos: text.pos,
                    size: text.galley.size(),
                    bounds: shape.visual_bounding_rect(),
                }),
                _ => None,
            })
            .collect()
    }

    fn textured(shapes: &[egui::Shape]) -> Vec<&egui::Shape> {
        shapes
            .iter()
            .filter(|shape| shape.texture_id() != egui::TextureId::default())
            .collect()
    }

    fn write_avatar(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("profile.png");
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(64, 64, Rgba([90, 30, 160, 255]));
        img.save(&path).expect("png saved");
        path
    }

    // Avatar presence changes the avatar only; every text block stays the same.
    #[test]
    fn avatar_presence_does_not_touch_content() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.png");
        let present = tmp.path().join("profile.png");
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(32, 48, Rgba([255, 255, 255, 255]));
        img.save(&present).expect("png saved");

        let without = ProfileApp::new(&ctx, &PROFILE, &missing);
        let with = ProfileApp::new(&ctx, &PROFILE, &present);

        assert_eq!(without.blocks, with.blocks);
        assert!(matches!(&without.avatar, AvatarView::Initials(text) if text == "ДК"));
        match &with.avatar {
            AvatarView::Texture(texture) => assert_eq!(texture.size(), [112, 112]),
            _ => panic!("expected avatar texture"),
        }
    }

    #[test]
    fn unreadable_avatar_renders_blank() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile.png");
        std::fs::write(&path, b"not an image").expect("file written");

        let app = ProfileApp::new(&ctx, &PROFILE, &path);

        assert!(matches!(app.avatar, AvatarView::Blank));
    }

    #[test]
    fn missing_avatar_paints_centered_initials_and_no_image() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let shapes = render(&ctx, &app);
        let texts = painted_texts(&shapes);

        let initials: Vec<_> = texts.iter().filter(|t| t.text == "ДК").collect();
        assert!(!initials.is_empty(), "initials should be painted");
        for t in &initials {
            assert!((t.bounds.center().x - 200.0).abs() < 1.5, "x = {}", t.bounds.center().x);
            assert!((t.bounds.center().y - 100.0).abs() < 12.0, "y = {}", t.bounds.center().y);
        }
        assert!(textured(&shapes).is_empty(), "no image should be painted");
    }

    #[test]
    fn image_avatar_paints_one_image_and_no_initials() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &write_avatar(&tmp));
        let AvatarView::Texture(texture) = &app.avatar else {
            panic!("expected avatar texture");
        };
        let texture_id = texture.id();

        let shapes = render(&ctx, &app);

        let images = textured(&shapes);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].texture_id(), texture_id);
        let bounds = images[0].visual_bounding_rect();
        assert!((bounds.center().x - 200.0).abs() < 0.5);
        assert!((bounds.center().y - 100.0).abs() < 0.5);
        assert!((bounds.width() - 112.0).abs() < 0.5);
        assert!(painted_texts(&shapes).iter().all(|t| t.text != "ДК"));
    }

    #[test]
    fn panel_paints_three_rules_inside_margins() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let shapes = render(&ctx, &app);
        let rules: Vec<egui::Rect> = shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Rect(rect) if rect.fill == theme::SEPARATOR_COLOR => Some(rect.rect),
                _ => None,
            })
            .collect();

        assert_eq!(rules.len(), 3);
        for rule in &rules {
            assert!((rule.left() - 30.0).abs() < 0.5, "left = {}", rule.left());
            assert!((rule.width() - 340.0).abs() < 0.5, "width = {}", rule.width());
            assert!(rule.top() > theme::HEADER_HEIGHT);
        }
        assert!(rules.windows(2).all(|pair| pair[0].top() < pair[1].top()));
    }

    #[test]
    fn text_is_painted_top_to_bottom_in_card_order() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let texts = painted_texts(&render(&ctx, &app));
        let mut order: Vec<&str> = texts.iter().map(|t| t.text.as_str()).collect();
        // Bold text is painted twice.
        order.dedup();

        assert_eq!(
            order,
            vec![
                "ДК",
                "Дмитрий Курников",
                "Студент 2ого курса",
                "Биография",
                PROFILE.biography,
                "Навыки",
                "Python, MySQL",
                "Опыт работы",
                "Сборщик электрических машин и аппаратов 2ого разряда",
                "ПАО 'ОСВАР'",
                "Лето 2023",
                "Администратор",
                "Панорама 360",
                "Июнь 2025-(по сей день)",
            ]
        );
    }

    #[test]
    fn bold_name_is_doubled_below_top_margin() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let texts = painted_texts(&render(&ctx, &app));
        let name: Vec<_> = texts.iter().filter(|t| t.text == PROFILE.name).collect();
        let subtitle = texts.iter().filter(|t| t.text == PROFILE.title).count();

        assert_eq!(name.len(), 2, "bold text gets a second pass");
        assert_eq!(subtitle, 1, "regular text is painted once");
        assert!((name[1].pos.x - name[0].pos.x - 0.6).abs() < 0.01);
        assert_eq!(name[0].pos.y, name[1].pos.y);
        // Header, panel top margin, name top margin.
        assert!((name[0].pos.x - 200.0).abs() < 0.5);
        assert!((name[0].pos.y - 230.0).abs() < 1.0, "y = {}", name[0].pos.y);
    }

    #[test]
    fn second_experience_entry_has_extra_top_gap() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let texts = painted_texts(&render(&ctx, &app));
        let find = |needle: &str| {
            texts
                .iter()
                .find(|t| t.text == needle)
                .unwrap_or_else(|| panic!("{needle} not painted"))
        };
        let first_period = find("Лето 2023");
        let first_org = find("ПАО 'ОСВАР'");
        let second_role = find("Администратор");

        let line_gap = first_period.pos.y - (first_org.pos.y + first_org.size.y);
        assert!((line_gap - theme::ENTRY_SPACING).abs() < 1.0, "gap = {line_gap}");

        let entry_gap = second_role.pos.y - (first_period.pos.y + first_period.size.y);
        let expected = theme::SECTION_SPACING + theme::ENTRY_TOP_MARGIN;
        assert!((entry_gap - expected).abs() < 1.0, "gap = {entry_gap}");
    }

    #[test]
    fn long_role_stays_on_one_line_and_card_fits_window() {
        let ctx = egui::Context::default();
        let tmp = TempDir::new().unwrap();
        let app = ProfileApp::new(&ctx, &PROFILE, &tmp.path().join("missing.png"));

        let texts = painted_texts(&render(&ctx, &app));
        let role = texts
            .iter()
            .find(|t| t.text == PROFILE.experience[0].role)
            .expect("role painted");
        assert!(role.size.y < theme::ENTRY_ROLE.size * 2.0, "height = {}", role.size.y);
        assert!(role.size.x > 340.0, "runs past the panel instead of wrapping");

        let last = texts.last().expect("text painted");
        assert_eq!(last.text, PROFILE.experience[1].period);
        assert!(last.pos.y + last.size.y <= 650.0);
    }
}

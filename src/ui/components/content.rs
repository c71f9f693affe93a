// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! White content panel: name, subtitle, and the labeled profile sections.

use eframe::egui;

use crate::models::profile::{ExperienceEntry, ProfileInfo};
use crate::ui::components::text::{StyledText, separator};
use crate::ui::theme;

pub const BIOGRAPHY_LABEL: &str = "Биография";
pub const SKILLS_LABEL: &str = "Навыки";
pub const EXPERIENCE_LABEL: &str = "Опыт работы";

/// One vertically stacked element of the content panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBlock<'a> {
    Name(&'a str),
    Title(&'a str),
    Separator,
    /// Bold label followed by wrapped body text.
    Section { label: &'static str, body: String },
    Experience {
        label: &'static str,
        entries: &'a [ExperienceEntry],
    },
}

/// Build the panel blocks in display order. Independent of the avatar.
pub fn content_blocks(profile: &ProfileInfo) -> Vec<ContentBlock<'_>> {
    vec![
        ContentBlock::Name(profile.name),
        ContentBlock::Title(profile.title),
        ContentBlock::Separator,
        ContentBlock::Section {
            label: BIOGRAPHY_LABEL,
            body: profile.biography.to_owned(),
        },
        ContentBlock::Separator,
        ContentBlock::Section {
            label: SKILLS_LABEL,
            body: profile.skills_line(),
        },
        ContentBlock::Separator,
        ContentBlock::Experience {
            label: EXPERIENCE_LABEL,
            entries: &profile.experience,
        },
    ]
}

/// Render the panel, stretching it over the remaining height of `ui`.
pub fn view(ui: &mut egui::Ui, blocks: &[ContentBlock<'_>]) {
    let (margin_x, margin_y) = theme::CONTENT_MARGIN;
    egui::Frame::new()
        .fill(theme::PANEL_BACKGROUND)
        .inner_margin(egui::Margin::symmetric(margin_x, margin_y))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.spacing_mut().item_spacing.y = theme::CONTENT_SPACING;
            for block in blocks {
                render_block(ui, block);
            }
        });
}

fn render_block(ui: &mut egui::Ui, block: &ContentBlock<'_>) {
    match block {
        ContentBlock::Name(text) => {
            ui.add(StyledText::new(text, theme::NAME));
        }
        ContentBlock::Title(text) => {
            ui.add(StyledText::new(text, theme::SUBTITLE));
        }
        ContentBlock::Separator => {
            separator(ui);
        }
        ContentBlock::Section { label, body } => {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = theme::SECTION_SPACING;
                ui.add(StyledText::new(label, theme::SECTION_LABEL));
                ui.add(StyledText::new(body, theme::SECTION_BODY));
            });
        }
        ContentBlock::Experience { label, entries } => {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = theme::SECTION_SPACING;
                ui.add(StyledText::new(label, theme::SECTION_LABEL));
                for (index, entry) in entries.iter().enumerate() {
                    render_entry(ui, entry, index > 0);
                }
            });
        }
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &ExperienceEntry, follows_another: bool) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = theme::ENTRY_SPACING;
        let role_style = if follows_another {
            theme::TextStyle {
                margin_top: theme::ENTRY_TOP_MARGIN,
                ..theme::ENTRY_ROLE
            }
        } else {
            theme::ENTRY_ROLE
        };
        ui.add(StyledText::new(entry.role, role_style));
        ui.add(StyledText::new(entry.organization, theme::ENTRY_ORGANIZATION));
        ui.add(StyledText::new(entry.period, theme::ENTRY_PERIOD));
    });
}

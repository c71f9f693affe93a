// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Profile domain model: the constant card content (UI-agnostic).

/// One work-history record shown in the experience block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    /// Role or job title (rendered bold).
    pub role: &'static str,
    /// Employer or organization (rendered in the accent color).
    pub organization: &'static str,
    /// Human-readable period of employment.
    pub period: &'static str,
}

/// Number of experience entries a profile carries.
pub const EXPERIENCE_COUNT: usize = 2;

/// Everything the card displays besides the avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub biography: &'static str,
    pub skills: &'static [&'static str],
    /// Work history in display order.
    pub experience: [ExperienceEntry; EXPERIENCE_COUNT],
}

/// The profile rendered by the application.
pub const PROFILE: ProfileInfo = ProfileInfo {
    name: "Дмитрий Курников",
    title: "Студент 2ого курса",
    biography: "Уроженец города Вязники. Окончил школу №4 с серебряной медалью.Сейчас учусь в МАИ на направлении 'Инноватика' ",
    skills: &["Python", "MySQL"],
    experience: [
        ExperienceEntry {
            role: "Сборщик электрических машин и аппаратов 2ого разряда",
            organization: "ПАО 'ОСВАР'",
            period: "Лето 2023",
        },
        ExperienceEntry {
            role: "Администратор",
            organization: "Панорама 360",
            period: "Июнь 2025-(по сей день)",
        },
    ],
};

impl ProfileInfo {
    /// Skills joined into the single plain-text line shown on the card.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }

    /// Two-letter placeholder built from the first letters of the first two name parts.
    ///
    /// Single-word names yield one letter; an empty name yields an empty string.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Building blocks of the profile card, each with a pure model part and an egui view.

pub mod avatar;
pub mod content;
pub mod header;
pub mod text;

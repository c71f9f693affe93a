//! Application entry point wiring egui/eframe to launch the profile window.

use std::path::Path;

use crate::models::profile::PROFILE;
use crate::ui::ProfileApp;
use crate::ui::components::avatar::AVATAR_PATH;
use eframe::egui;

pub const WINDOW_TITLE: &str = "Профиль пользователя";
/// Inner window size in logical points.
pub const WINDOW_SIZE: [f32; 2] = [400.0, 650.0];

/// Viewport options for the fixed-size profile window.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    }
}

/// Bootstrap the desktop application and block in the egui event loop until the window closes.
pub fn run() -> eframe::Result<()> {
    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(|cc| {
            Ok(Box::new(ProfileApp::new(
                &cc.egui_ctx,
                &PROFILE,
                Path::new(AVATAR_PATH),
            )))
        }),
    )
}

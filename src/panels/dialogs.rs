use egui::color_picker::{Alpha, color_picker_color32};

use crate::SketchApp;

/// Modal color picker and error windows.
pub fn dialogs(app: &mut SketchApp, ctx: &egui::Context) {
    color_picker_window(app, ctx);
    error_window(app, ctx);
}

fn color_picker_window(app: &mut SketchApp, ctx: &egui::Context) {
    let mut outcome = None;
    let Some(color) = app.color_picker_mut() else {
        return;
    };

    egui::Window::new("Select Pencil Color")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            color_picker_color32(ui, color, Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(false);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        outcome = Some(false);
    }
    if let Some(confirmed) = outcome {
        app.close_color_picker(confirmed);
    }
}

fn error_window(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(message) = app.error_message().map(str::to_owned) else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.dismiss_error();
    }
}

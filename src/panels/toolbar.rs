use egui::Slider;

use crate::SketchApp;
use crate::components::ToolButton;
use crate::tools::ToolKind;

/// Horizontal control bar below the canvas.
pub fn toolbar(app: &mut SketchApp, ctx: &egui::Context) {
    let full = app.edition().has_shapes();
    let enabled = !app.is_modal_open();

    egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Choose Color").clicked() {
                    app.open_color_picker();
                }
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, app.controller().pen_color());

                if full {
                    if ui.selectable_label(app.controller().is_eraser(), "Eraser").clicked() {
                        app.controller_mut().toggle_eraser();
                    }
                    if ui.button("Clear").clicked() {
                        app.controller_mut().clear();
                    }
                    if ui.button("Save as PNG").clicked() {
                        app.save_as_png();
                    }
                    if ui.button("Toggle Background").clicked() {
                        app.controller_mut().toggle_background();
                    }
                    if ui.button("Set Image Background").clicked() {
                        app.choose_background_image();
                    }
                }

                ui.separator();
                let (min, max) = app.controller().width_range();
                let mut width = app.controller().width();
                let slider = Slider::new(&mut width, min..=max)
                    .step_by(1.0)
                    .text("Pen Width");
                if ui.add(slider).changed() {
                    app.controller_mut().set_width(width);
                }

                if full {
                    ui.separator();
                    let current = app.controller().tool();
                    for tool in ToolKind::ALL {
                        if ToolButton::new(tool, tool == current).show(ui).clicked() {
                            app.select_tool(tool);
                        }
                    }
                }
            });
        });
    });
}

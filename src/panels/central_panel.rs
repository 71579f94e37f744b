use crate::SketchApp;

/// Canvas filling the rest of the window.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;
            app.controller_mut().resize_canvas(canvas_rect.size());

            if !app.is_modal_open() {
                let events = app.input_mut().process_input(ctx, canvas_rect);
                app.handle_canvas_events(&events);
            }

            let (renderer, controller) = app.renderer_and_controller();
            renderer.render(ctx, &painter, canvas_rect, controller.surface());

            if app.controller().is_dragging() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}

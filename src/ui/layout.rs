use crate::app::RevisionApp;
use egui::{Button, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut RevisionApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&app.content.title).heading().strong());
                ui.label(RichText::new(&app.content.tagline).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!app.session.is_empty(), Button::new("🗑 Effacer mes réponses"))
                    .clicked()
                {
                    app.confirm_reset = true;
                }

                if ui
                    .add_enabled(!app.navigation.is_home(), Button::new("🏠 Accueil"))
                    .clicked()
                {
                    app.volver_al_inicio();
                    ctx.request_repaint();
                }
            });
        });

        // Migas de pan
        let crumbs = app.breadcrumb();
        if crumbs.len() > 1 {
            ui.label(RichText::new(crumbs.join(" › ")).small().weak());
        }

        // Aviso tras borrar respuestas, visible en cualquier vista
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
        }
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(app: &RevisionApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&app.content.footer).small().weak());

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Mode sombre").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Mode clair").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel central con scroll vertical y ancho máximo de contenido.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right_enabled, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(right_label))
            })
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}

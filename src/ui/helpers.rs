// src/ui/helpers.rs
use crate::view_models::TopicCard;
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};

/// Tarjeta de tema/subtema: título, viñetas y botón para entrar.
/// Devuelve `true` si se ha pulsado.
pub fn topic_card(ui: &mut Ui, card: &TopicCard, width: f32) -> bool {
    let mut clicked = false;
    ui.allocate_ui(Vec2::new(width, 0.0), |ui| {
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(width - 28.0);
                let title = RichText::new(card.label())
                    .heading()
                    .color(Color32::from_rgb(37, 99, 235));
                ui.label(title);
                ui.add_space(6.0);
                for line in &card.summary {
                    ui.label(format!("• {line}"));
                }
                ui.add_space(8.0);
                clicked = ui
                    .add(Button::new("Ouvrir ▶").min_size(Vec2::new(width - 28.0, 28.0)))
                    .clicked();
            });
    });
    clicked
}

/// Recuadro destacado (objetivos, avisos), con barra de color a la izquierda
pub fn callout(ui: &mut Ui, accent: Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(accent.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, accent))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

pub fn level_badge(ui: &mut Ui, level: u8, label: &str) {
    let color = match level {
        1 => Color32::from_rgb(22, 101, 52),
        2 => Color32::from_rgb(133, 77, 14),
        _ => Color32::from_rgb(153, 27, 27),
    };
    ui.label(
        RichText::new(format!(" {label} "))
            .strong()
            .color(Color32::WHITE)
            .background_color(color),
    );
}

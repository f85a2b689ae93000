use crate::app::RevisionApp;
use crate::ui::helpers::{callout, topic_card};
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_home(app: &mut RevisionApp, ctx: &Context) {
    let cards = app.topic_cards();
    let overview = app.quiz_overview();
    let welcome = app.content.welcome.clone();

    scroll_panel(ctx, 960.0, |ui| {
        // Rejilla de tarjetas: 3 columnas si cabe, si no 2 o 1
        let gap = 12.0;
        let columns = ((ui.available_width() + gap) / 300.0).floor().clamp(1.0, 3.0) as usize;
        let card_w = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;

        let mut abrir = None;
        for row in cards.chunks(columns) {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for card in row {
                    if topic_card(ui, card, card_w) {
                        abrir = Some(card.id.clone());
                    }
                }
            });
            ui.add_space(gap);
        }
        if let Some(id) = abrir {
            app.abrir_tema(&id);
        }

        ui.add_space(8.0);
        callout(ui, Color32::from_rgb(59, 130, 246), |ui| {
            ui.label(RichText::new(overview.label()).strong());
        });

        ui.add_space(16.0);
        CommonMarkViewer::new().show(ui, &mut app.cm_cache, &welcome);
    });
}

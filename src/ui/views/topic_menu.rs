use crate::app::RevisionApp;
use crate::ui::helpers::topic_card;
use crate::ui::layout::scroll_panel;
use crate::ui::views::section::ui_page;
use egui::{Context, RichText};

pub fn ui_topic_menu(app: &mut RevisionApp, ctx: &Context) {
    let (title, intro) = match app.current_topic() {
        Some(t) => (t.title.clone(), t.intro.clone()),
        None => return,
    };
    let cards = app.sub_topic_cards();
    // Página propia del tema, si la tiene, bajo las tarjetas
    let page = app.current_page().cloned();

    scroll_panel(ctx, 960.0, |ui| {
        if ui.button("⬅ Retour").clicked() {
            app.volver_al_inicio();
            return;
        }
        ui.add_space(8.0);
        ui.label(RichText::new(&title).heading().strong().size(26.0));
        if let Some(intro) = &intro {
            ui.label(RichText::new(intro).weak());
        }
        ui.add_space(16.0);

        let gap = 12.0;
        let columns = ((ui.available_width() + gap) / 300.0).floor().clamp(1.0, 3.0) as usize;
        let card_w = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;

        for row in cards.chunks(columns) {
            let mut abrir = None;
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for card in row {
                    if topic_card(ui, card, card_w) {
                        abrir = Some(card.id.clone());
                    }
                }
            });
            if let Some(id) = abrir {
                app.abrir_subtema(&id);
                return;
            }
            ui.add_space(gap);
        }

        if let Some(page) = &page {
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);
            ui_page(app, ui, page);
        }
    });
}

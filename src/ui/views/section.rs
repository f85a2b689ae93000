use crate::app::RevisionApp;
use crate::model::Page;
use crate::ui::helpers::callout;
use crate::ui::layout::scroll_panel;
use crate::ui::views::{exercises, quiz};
use egui::{Color32, Context, RichText, Ui};
use egui_commonmark::CommonMarkViewer;

pub fn ui_section(app: &mut RevisionApp, ctx: &Context) {
    // Copia de la página para no mantener el borrow sobre `app.content`
    let page = match app.current_page() {
        Some(p) => p.clone(),
        None => {
            scroll_panel(ctx, 760.0, |ui| {
                ui.label("Aucune page pour cette section.");
                if ui.button("⬅ Retour").clicked() {
                    app.volver_al_inicio();
                }
            });
            return;
        }
    };

    scroll_panel(ctx, 860.0, |ui| {
        if ui.button("⬅ Retour").clicked() {
            app.volver_al_inicio();
            return;
        }
        ui.add_space(8.0);
        ui_page(app, ui, &page);
    });
}

/// Cuerpo de una página: objetivos, lección, quiz y ejercicios.
pub fn ui_page(app: &mut RevisionApp, ui: &mut Ui, page: &Page) {
    ui.label(RichText::new(&page.heading).heading().strong().size(26.0));
    if let Some(intro) = &page.intro {
        ui.add_space(4.0);
        ui.label(intro);
    }
    ui.add_space(12.0);

    if !page.objectives.is_empty() {
        callout(ui, Color32::from_rgb(59, 130, 246), |ui| {
            ui.label(RichText::new("Objectifs d'apprentissage").strong().size(18.0));
            ui.label("À la fin de cette section, vous serez capable de :");
            for o in &page.objectives {
                ui.label(format!("• {o}"));
            }
        });
        ui.add_space(12.0);
    }

    CommonMarkViewer::new().show(ui, &mut app.cm_cache, &page.lesson);

    if let Some(q) = &page.quiz {
        ui.add_space(20.0);
        quiz::ui_quiz_block(app, ui, q);
    }

    let rows = RevisionApp::exercise_rows(page);
    if !rows.is_empty() {
        ui.add_space(20.0);
        exercises::ui_exercises(ui, &rows);
    }
}

use crate::app::RevisionApp;
use crate::model::{Quiz, ResultBand};
use crate::ui::helpers::callout;
use crate::ui::layout::two_button_row;
use egui::{Color32, Frame, RichText, Ui};

/// Bloque genérico de quiz: preguntas con opciones, corrección y resultado.
pub fn ui_quiz_block(app: &mut RevisionApp, ui: &mut Ui, quiz: &Quiz) {
    let section = quiz.section.as_str();

    Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(quiz.display_title()).heading().strong());
            ui.add_space(10.0);

            for (i, (qid, question)) in quiz.keyed_questions().enumerate() {
                ui.label(RichText::new(format!("{}. {}", i + 1, question.question)).strong());
                ui.add_space(4.0);
                let selected = app.session.answer(section, &qid).map(str::to_owned);
                for opt in &question.options {
                    let checked = selected.as_deref() == Some(opt.value.as_str());
                    if ui.radio(checked, &opt.text).clicked() {
                        app.seleccionar_respuesta(section, &qid, &opt.value);
                    }
                }
                ui.add_space(12.0);
            }

            let width = ui.available_width().min(520.0);
            let tiene_algo = app.session.answered_count(section) > 0
                || app.session.result(section).is_some();
            let (verificar, reiniciar) =
                two_button_row(ui, width, "Vérifier mes réponses", "⟲ Recommencer", tiene_algo);
            if verificar {
                app.enviar_quiz(section);
            }
            if reiniciar {
                app.reiniciar_quiz(section);
            }

            if let Some(result) = app.session.result(section) {
                ui.add_space(12.0);
                let band = result.band();
                let accent = match band {
                    ResultBand::Perfect => Color32::from_rgb(22, 163, 74),
                    ResultBand::Pass => Color32::from_rgb(202, 138, 4),
                    ResultBand::Fail => Color32::from_rgb(220, 38, 38),
                };
                callout(ui, accent, |ui| {
                    ui.label(
                        RichText::new(format!("Score : {}/{}", result.score, result.total))
                            .strong()
                            .size(18.0),
                    );
                    ui.label(RichText::new(band.message()).color(accent));
                });
            }
        });
}

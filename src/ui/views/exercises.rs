use crate::ui::helpers::level_badge;
use crate::view_models::ExerciseRow;
use egui::{Frame, RichText, Ui};

pub fn ui_exercises(ui: &mut Ui, rows: &[ExerciseRow]) {
    ui.label(RichText::new("Exercices").heading().strong());
    ui.add_space(8.0);

    for row in rows {
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(16, 12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                level_badge(ui, row.level, &row.level_label());
                ui.add_space(6.0);
                ui.label(RichText::new(format!("Exercice {}", row.number)).strong().size(17.0));
                ui.label(&row.description);
                for task in &row.tasks {
                    ui.label(format!("• {task}"));
                }
            });
        ui.add_space(10.0);
    }
}

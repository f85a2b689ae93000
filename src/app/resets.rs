use super::*;

impl RevisionApp {
    /// Borra todas las respuestas y resultados de la sesión
    pub fn borrar_respuestas(&mut self) {
        info!("Borrando todas las respuestas de la sesión");
        self.session.clear();
        self.confirm_reset = false;
        self.message = "Toutes vos réponses ont été effacées.".to_owned();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmer la réinitialisation")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Voulez-vous vraiment effacer toutes vos réponses et tous vos scores ?");
                ui.horizontal(|ui| {
                    if ui.button("Oui, tout effacer").clicked() {
                        self.borrar_respuestas();
                    }
                    if ui.button("Non").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

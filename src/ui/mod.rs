mod helpers;
pub mod layout;
pub mod views;

use crate::app::{RevisionApp, Screen};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for RevisionApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // CABECERA: título, migas de pan y botón de inicio
        top_panel(self, ctx);

        // PIE: tema oscuro/claro y créditos
        bottom_panel(self, ctx);

        // Dispatch por estado de navegación
        match self.screen() {
            Screen::Home => views::home::ui_home(self, ctx),
            Screen::TopicMenu { .. } => views::topic_menu::ui_topic_menu(self, ctx),
            Screen::Page => views::section::ui_section(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}

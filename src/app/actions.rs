use super::*;
use crate::model::QuizResult;

impl RevisionApp {
    /// Marca la opción `value` para la pregunta `question` del quiz `section`
    pub fn seleccionar_respuesta(&mut self, section: &str, question: &str, value: &str) {
        debug!("[{section}] {question} = {value}");
        self.session.set_answer(section, question, value);
    }

    /// Corrige el quiz de la sección y guarda el resultado (sustituye al anterior)
    pub fn enviar_quiz(&mut self, section: &str) -> Option<QuizResult> {
        let key = match self.quiz(section) {
            Some(q) => q.correct_answers.clone(),
            None => {
                warn!("Quiz desconocido '{section}', no se corrige");
                return None;
            }
        };

        let result = self.session.submit(section, &key);
        info!(
            "Quiz '{section}' corregido: {}/{} ({} respondidas)",
            result.score,
            result.total,
            self.session.answered_count(section)
        );
        Some(result)
    }

    pub fn reiniciar_quiz(&mut self, section: &str) {
        info!("Reiniciando quiz '{section}'");
        self.session.reset(section);
    }
}

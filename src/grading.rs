use crate::model::{AnswerKey, QuizResult, UserAnswers};

/// Cuenta las respuestas del alumno que coinciden con la clave.
///
/// Sólo se recorren las preguntas de `key`: una pregunta sin responder nunca
/// puntúa, y una respuesta a una pregunta que no está en la clave se ignora.
pub fn score(answers: &UserAnswers, key: &AnswerKey) -> QuizResult {
    let score = key
        .iter()
        .filter(|(q, correct)| answers.get(*q) == Some(*correct))
        .count();

    QuizResult {
        score,
        total: key.len(),
    }
}

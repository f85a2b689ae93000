use crate::grading::score;
use crate::model::{AnswerKey, QuizResult, UserAnswers};
use crate::records::UserAnswersRecord;
use std::collections::HashMap;

/// Respuestas y resultados de todos los quiz de la sesión, por sección.
///
/// Las respuestas y el resultado se guardan por separado: después de enviar,
/// el alumno puede cambiar respuestas y volver a enviar.
#[derive(Clone, Debug, Default)]
pub struct QuizSession {
    answers: HashMap<String, UserAnswers>,
    results: HashMap<String, QuizResult>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&mut self, section: &str, question: &str, value: &str) {
        self.answers
            .entry(section.to_owned())
            .or_default()
            .insert(question.to_owned(), value.to_owned());
    }

    pub fn answer(&self, section: &str, question: &str) -> Option<&str> {
        self.answers
            .get(section)
            .and_then(|a| a.get(question))
            .map(String::as_str)
    }

    pub fn answers(&self, section: &str) -> UserAnswers {
        self.answers.get(section).cloned().unwrap_or_default()
    }

    pub fn answered_count(&self, section: &str) -> usize {
        self.answers.get(section).map(|a| a.len()).unwrap_or(0)
    }

    /// Corrige la sección contra `key` y sustituye el resultado anterior.
    pub fn submit(&mut self, section: &str, key: &AnswerKey) -> QuizResult {
        let empty = UserAnswers::new();
        let answers = self.answers.get(section).unwrap_or(&empty);
        let result = score(answers, key);
        self.results.insert(section.to_owned(), result);
        result
    }

    /// `None` mientras la sección no se haya enviado nunca
    pub fn result(&self, section: &str) -> Option<QuizResult> {
        self.results.get(section).copied()
    }

    pub fn results(&self) -> impl Iterator<Item = (&str, &QuizResult)> {
        self.results.iter().map(|(s, r)| (s.as_str(), r))
    }

    /// Borra respuestas y resultado de una sección
    pub fn reset(&mut self, section: &str) {
        self.answers.remove(section);
        self.results.remove(section);
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
        self.results.clear();
    }

    /// Registro `user_answers` para una sección ya enviada
    pub fn answers_record(
        &self,
        section: &str,
        user_id: &str,
        quiz_id: &str,
    ) -> Option<UserAnswersRecord> {
        let result = self.result(section)?;
        Some(UserAnswersRecord {
            id: None,
            created_at: None,
            user_id: user_id.to_owned(),
            quiz_id: quiz_id.to_owned(),
            answers: self.answers(section),
            score: result.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> AnswerKey {
        [("q1", "b"), ("q2", "a"), ("q3", "a")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn result_is_absent_until_submit() {
        let mut session = QuizSession::new();
        session.set_answer("numeration", "q1", "b");
        assert_eq!(session.result("numeration"), None);

        let result = session.submit("numeration", &key());
        assert_eq!(result, QuizResult { score: 1, total: 3 });
        assert_eq!(session.result("numeration"), Some(result));
    }

    #[test]
    fn set_answer_overwrites_previous_choice() {
        let mut session = QuizSession::new();
        session.set_answer("numeration", "q2", "c");
        session.set_answer("numeration", "q2", "a");
        assert_eq!(session.answer("numeration", "q2"), Some("a"));
        assert_eq!(session.answered_count("numeration"), 1);
    }

    #[test]
    fn example_scores_two_out_of_three() {
        let mut session = QuizSession::new();
        session.set_answer("numeration", "q1", "b");
        session.set_answer("numeration", "q2", "b");
        session.set_answer("numeration", "q3", "a");
        assert_eq!(
            session.submit("numeration", &key()),
            QuizResult { score: 2, total: 3 }
        );
    }

    #[test]
    fn resubmitting_recomputes_instead_of_accumulating() {
        let mut session = QuizSession::new();
        session.set_answer("web", "q1", "b");
        let first = session.submit("web", &key());
        let second = session.submit("web", &key());
        assert_eq!(first, second);

        session.set_answer("web", "q1", "c");
        let third = session.submit("web", &key());
        assert_eq!(third, QuizResult { score: 0, total: 3 });
        assert_eq!(session.result("web"), Some(third));
    }

    #[test]
    fn sections_are_independent() {
        let mut session = QuizSession::new();
        session.set_answer("python", "q1", "b");
        session.submit("python", &key());
        assert_eq!(session.answer("web", "q1"), None);
        assert_eq!(session.result("web"), None);
        assert_eq!(session.results().count(), 1);
    }

    #[test]
    fn submit_with_no_answers_scores_zero() {
        let mut session = QuizSession::new();
        let result = session.submit("media", &key());
        assert_eq!(result, QuizResult { score: 0, total: 3 });
    }

    #[test]
    fn reset_clears_answers_and_result() {
        let mut session = QuizSession::new();
        session.set_answer("database", "q1", "b");
        session.submit("database", &key());
        session.set_answer("python", "q1", "b");

        session.reset("database");
        assert_eq!(session.answered_count("database"), 0);
        assert_eq!(session.result("database"), None);
        assert_eq!(session.answer("python", "q1"), Some("b"));

        assert!(!session.is_empty());
        session.clear();
        assert_eq!(session.answered_count("python"), 0);
        assert!(session.is_empty());
    }

    #[test]
    fn answers_record_requires_a_submission() {
        let mut session = QuizSession::new();
        session.set_answer("numeration", "q1", "b");
        assert!(session.answers_record("numeration", "u1", "quiz-1").is_none());

        session.submit("numeration", &key());
        let record = session
            .answers_record("numeration", "u1", "quiz-1")
            .expect("record");
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.quiz_id, "quiz-1");
        assert_eq!(record.score, 1);
        assert_eq!(record.answers.get("q1").map(String::as_str), Some("b"));
    }
}

// src/records.rs
//
// Esquema de almacenamiento externo (tablas `users`, `quizzes`, `user_answers`).
// La app no lee ni escribe en ningún almacén: estos tipos sólo fijan la forma
// de los registros si algún día se guarda el progreso.

use crate::model::{AnswerKey, Question, Quiz, UserAnswers};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub section: String,
    pub questions: Vec<Question>,
    pub correct_answers: AnswerKey,
}

impl QuizRecord {
    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            id: None,
            created_at: None,
            section: quiz.section.clone(),
            questions: quiz.questions.clone(),
            correct_answers: quiz.correct_answers.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserAnswersRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub user_id: String,
    pub quiz_id: String,
    pub answers: UserAnswers,
    pub score: usize,
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pregunta -> valor de la opción correcta (`"q1" -> "b"`)
pub type AnswerKey = BTreeMap<String, String>;

/// Pregunta -> valor elegido por el alumno. Puede estar incompleto.
pub type UserAnswers = BTreeMap<String, String>;

/// Identificador de una pregunta a partir de su posición (0-based): `q1`, `q2`, …
pub fn question_id(index: usize) -> String {
    format!("q{}", index + 1)
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Content {
    pub title: String,
    pub tagline: String,
    pub footer: String,
    pub welcome: String, // markdown de la portada
    pub topics: Vec<Topic>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Vec<String>, // viñetas de la tarjeta en la portada
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub sub_topics: Vec<SubTopic>,
}

impl Topic {
    pub fn has_sub_topics(&self) -> bool {
        !self.sub_topics.is_empty()
    }

    pub fn sub_topic(&self, id: &str) -> Option<&SubTopic> {
        self.sub_topics.iter().find(|s| s.id == id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubTopic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Vec<String>,
    pub page: Page,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page {
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    pub lesson: String, // CommonMark
    #[serde(default)]
    pub quiz: Option<Quiz>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub section: String,
    #[serde(default)]
    pub title: Option<String>,
    pub questions: Vec<Question>,
    pub correct_answers: AnswerKey,
}

impl Quiz {
    /// Preguntas junto a su identificador (`q1`, `q2`, …)
    pub fn keyed_questions(&self) -> impl Iterator<Item = (String, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| (question_id(i), q))
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Quiz d'auto-évaluation")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub value: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Exercise {
    pub level: u8, // 1 fácil, 2 medio, 3 difícil
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

/// Franja de feedback que se muestra bajo la puntuación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultBand {
    Perfect,
    Pass,
    Fail,
}

impl QuizResult {
    pub fn band(&self) -> ResultBand {
        if self.score == self.total {
            ResultBand::Perfect
        } else if 2 * self.score >= self.total {
            ResultBand::Pass
        } else {
            ResultBand::Fail
        }
    }
}

impl ResultBand {
    pub fn message(&self) -> &'static str {
        match self {
            ResultBand::Perfect => "Félicitations ! Vous avez tout compris !",
            ResultBand::Pass => "Bon travail, mais quelques révisions seraient utiles.",
            ResultBand::Fail => {
                "Vous devriez revoir cette section pour mieux comprendre les concepts."
            }
        }
    }
}

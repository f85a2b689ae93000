// src/data.rs

use crate::model::{Content, Page, question_id};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    Parse(serde_yaml::Error),
    DuplicateTopic(String),
    DuplicateSubTopic { topic: String, sub_topic: String },
    DuplicateSection(String),
    EmptyTopic(String),
    DuplicateOption { section: String, question: String, value: String },
    UnknownQuestion { section: String, question: String },
    MissingAnswer { section: String, question: String },
    AnswerNotAnOption { section: String, question: String, value: String },
    InvalidExerciseLevel { page: String, level: u8 },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse(e) => write!(f, "No se pudo parsear el contenido YAML: {e}"),
            ContentError::DuplicateTopic(t) => write!(f, "Tema duplicado: '{t}'"),
            ContentError::DuplicateSubTopic { topic, sub_topic } => {
                write!(f, "Subtema duplicado '{sub_topic}' en el tema '{topic}'")
            }
            ContentError::DuplicateSection(s) => write!(f, "Sección de quiz duplicada: '{s}'"),
            ContentError::EmptyTopic(t) => {
                write!(f, "El tema '{t}' no tiene ni página ni subtemas")
            }
            ContentError::DuplicateOption { section, question, value } => {
                write!(f, "[{section}/{question}] opción '{value}' repetida")
            }
            ContentError::UnknownQuestion { section, question } => {
                write!(f, "[{section}] la clave corrige '{question}', que no existe")
            }
            ContentError::MissingAnswer { section, question } => {
                write!(f, "[{section}] '{question}' no tiene respuesta en la clave")
            }
            ContentError::AnswerNotAnOption { section, question, value } => {
                write!(f, "[{section}/{question}] la respuesta '{value}' no es una opción")
            }
            ContentError::InvalidExerciseLevel { page, level } => {
                write!(f, "[{page}] nivel de ejercicio {level} fuera de 1..=3")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ContentError {
    fn from(e: serde_yaml::Error) -> Self {
        ContentError::Parse(e)
    }
}

/// Carga y valida el contenido embebido en el binario
pub fn read_content_embedded() -> Result<Content, ContentError> {
    let file_content = include_str!("data/contenu.yaml");
    parse_content(file_content)
}

pub fn parse_content(yaml: &str) -> Result<Content, ContentError> {
    let content: Content = serde_yaml::from_str(yaml)?;
    validate_content(&content)?;
    Ok(content)
}

/// Comprobaciones de coherencia del contenido. Cualquier fallo es un error de
/// redacción del YAML, no algo que el usuario pueda provocar.
pub fn validate_content(content: &Content) -> Result<(), ContentError> {
    let mut topic_ids = HashSet::new();
    let mut sections = HashSet::new();

    for topic in &content.topics {
        if !topic_ids.insert(topic.id.as_str()) {
            return Err(ContentError::DuplicateTopic(topic.id.clone()));
        }
        if topic.page.is_none() && topic.sub_topics.is_empty() {
            return Err(ContentError::EmptyTopic(topic.id.clone()));
        }

        let mut sub_ids = HashSet::new();
        for sub in &topic.sub_topics {
            if !sub_ids.insert(sub.id.as_str()) {
                return Err(ContentError::DuplicateSubTopic {
                    topic: topic.id.clone(),
                    sub_topic: sub.id.clone(),
                });
            }
        }

        let pages = topic
            .page
            .iter()
            .chain(topic.sub_topics.iter().map(|s| &s.page));
        for page in pages {
            validate_page(page, &mut sections)?;
        }
    }
    Ok(())
}

fn validate_page<'a>(page: &'a Page, sections: &mut HashSet<&'a str>) -> Result<(), ContentError> {
    if let Some(e) = page.exercises.iter().find(|e| !(1..=3).contains(&e.level)) {
        return Err(ContentError::InvalidExerciseLevel {
            page: page.heading.clone(),
            level: e.level,
        });
    }

    let quiz = match &page.quiz {
        Some(q) => q,
        None => return Ok(()),
    };
    let section = &quiz.section;
    if !sections.insert(section.as_str()) {
        return Err(ContentError::DuplicateSection(section.clone()));
    }

    for (qid, q) in quiz.keyed_questions() {
        let mut values = HashSet::new();
        for opt in &q.options {
            if !values.insert(opt.value.as_str()) {
                return Err(ContentError::DuplicateOption {
                    section: section.clone(),
                    question: qid,
                    value: opt.value.clone(),
                });
            }
        }

        match quiz.correct_answers.get(&qid) {
            None => {
                return Err(ContentError::MissingAnswer {
                    section: section.clone(),
                    question: qid,
                });
            }
            Some(value) if !q.has_option(value) => {
                return Err(ContentError::AnswerNotAnOption {
                    section: section.clone(),
                    question: qid,
                    value: value.clone(),
                });
            }
            Some(_) => {}
        }
    }

    let asked: HashSet<String> = (0..quiz.questions.len()).map(question_id).collect();
    if let Some(extra) = quiz.correct_answers.keys().find(|k| !asked.contains(*k)) {
        return Err(ContentError::UnknownQuestion {
            section: section.clone(),
            question: extra.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title: T
tagline: t
footer: f
welcome: w
topics:
  - id: web
    title: Web
    page:
      heading: Web
      lesson: "..."
      quiz:
        section: web
        questions:
          - question: "Quelle balise ?"
            options:
              - { value: a, text: "<link>" }
              - { value: b, text: "<a>" }
        correct_answers: { q1: b }
"#;

    #[test]
    fn embedded_content_is_consistent() {
        let content = read_content_embedded().expect("contenido embebido válido");
        assert!(!content.topics.is_empty());
    }

    #[test]
    fn embedded_content_has_every_quiz_section() {
        let content = read_content_embedded().expect("contenido embebido válido");
        let sections: HashSet<String> = content
            .topics
            .iter()
            .flat_map(|t| t.page.iter().chain(t.sub_topics.iter().map(|s| &s.page)))
            .filter_map(|p| p.quiz.as_ref())
            .map(|q| q.section.clone())
            .collect();
        for expected in [
            "numeration",
            "caracteres",
            "media",
            "von-neumann",
            "processor-memory",
            "operating-system",
            "algorithmique",
            "python",
            "database",
            "web",
        ] {
            assert!(sections.contains(expected), "falta la sección {expected}");
        }
    }

    #[test]
    fn numeration_key_matches_reference_quiz() {
        let content = read_content_embedded().expect("contenido embebido válido");
        let quiz = content
            .topics
            .iter()
            .find(|t| t.id == "representation")
            .and_then(|t| t.sub_topic("numeration"))
            .and_then(|s| s.page.quiz.as_ref())
            .expect("quiz de numeración");
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.correct_answers.get("q1").map(String::as_str), Some("b"));
        assert_eq!(quiz.correct_answers.get("q2").map(String::as_str), Some("a"));
        assert_eq!(quiz.correct_answers.get("q3").map(String::as_str), Some("a"));
    }

    #[test]
    fn minimal_content_parses() {
        let content = parse_content(MINIMAL).expect("válido");
        assert_eq!(content.topics[0].id, "web");
    }

    #[test]
    fn rejects_broken_yaml() {
        assert!(matches!(parse_content("topics: [ ::"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn rejects_key_for_question_never_asked() {
        let yaml = MINIMAL.replace("{ q1: b }", "{ q1: b, q2: a }");
        match parse_content(&yaml) {
            Err(ContentError::UnknownQuestion { section, question }) => {
                assert_eq!(section, "web");
                assert_eq!(question, "q2");
            }
            other => panic!("esperaba UnknownQuestion, obtuve {other:?}"),
        }
    }

    #[test]
    fn rejects_question_without_answer() {
        let yaml = MINIMAL.replace("{ q1: b }", "{}");
        assert!(matches!(
            parse_content(&yaml),
            Err(ContentError::MissingAnswer { .. })
        ));
    }

    #[test]
    fn rejects_answer_that_is_not_an_option() {
        let yaml = MINIMAL.replace("{ q1: b }", "{ q1: z }");
        assert!(matches!(
            parse_content(&yaml),
            Err(ContentError::AnswerNotAnOption { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_option_values() {
        let yaml = MINIMAL.replace("{ value: b, text: \"<a>\" }", "{ value: a, text: \"<a>\" }");
        assert!(matches!(
            parse_content(&yaml),
            Err(ContentError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_topics_and_sections() {
        let mut content = parse_content(MINIMAL).expect("válido");
        content.topics.push(content.topics[0].clone());
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::DuplicateTopic(_))
        ));

        let mut content = parse_content(MINIMAL).expect("válido");
        let mut other = content.topics[0].clone();
        other.id = "web-bis".into();
        content.topics.push(other);
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::DuplicateSection(s)) if s == "web"
        ));
    }

    fn with_exercise(level: u8) -> String {
        let lesson = "      lesson: \"...\"\n";
        let exercise = format!("        - {{ level: {level}, description: x }}\n");
        MINIMAL.replace(lesson, &format!("{lesson}      exercises:\n{exercise}"))
    }

    #[test]
    fn rejects_exercise_level_out_of_range() {
        match parse_content(&with_exercise(7)) {
            Err(ContentError::InvalidExerciseLevel { page, level }) => {
                assert_eq!(page, "Web");
                assert_eq!(level, 7);
            }
            other => panic!("esperaba InvalidExerciseLevel, obtuve {other:?}"),
        }
        assert!(matches!(
            parse_content(&with_exercise(0)),
            Err(ContentError::InvalidExerciseLevel { level: 0, .. })
        ));
        assert!(parse_content(&with_exercise(3)).is_ok());
    }

    #[test]
    fn rejects_topic_without_page_or_sub_topics() {
        let mut content = parse_content(MINIMAL).expect("válido");
        content.topics[0].page = None;
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::EmptyTopic(_))
        ));
    }

    #[test]
    fn errors_read_well() {
        let err = ContentError::UnknownQuestion {
            section: "web".into(),
            question: "q4".into(),
        };
        assert_eq!(err.to_string(), "[web] la clave corrige 'q4', que no existe");
    }
}

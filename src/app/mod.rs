use crate::data::{ContentError, read_content_embedded};
use crate::model::{Content, Page, Quiz, SubTopic, Topic};
use egui_commonmark::CommonMarkCache;
use log::{debug, info, warn};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod session;
pub mod view_models;

pub use navigation::{NavigationState, Screen};
pub use session::QuizSession;

// Re-export de view models
pub use crate::view_models::{ExerciseRow, QuizOverview, TopicCard};

/// Estado completo de la sesión: contenido, navegación y quiz.
/// Vive sólo mientras la app está abierta.
pub struct RevisionApp {
    pub content: Content,
    pub navigation: NavigationState,
    pub session: QuizSession,
    pub message: String,
    pub cm_cache: CommonMarkCache,
    pub confirm_reset: bool,
}

impl RevisionApp {
    pub fn new() -> Result<Self, ContentError> {
        let app = Self::with_content(read_content_embedded()?);
        info!(
            "Contenido cargado: {} temas, {} quiz",
            app.content.topics.len(),
            app.all_quizzes().count()
        );
        Ok(app)
    }

    pub fn with_content(content: Content) -> Self {
        Self {
            content,
            navigation: NavigationState::default(),
            session: QuizSession::new(),
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
            confirm_reset: false,
        }
    }
}

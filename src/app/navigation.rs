use super::*;

/// Qué se está mostrando: la portada, un tema o un subtema dentro de un tema.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Home,
    Topic(String),
    SubTopic { topic: String, sub_topic: String },
}

impl NavigationState {
    /// Entra en un tema. Siempre empieza sin subtema seleccionado.
    pub fn go_to_topic(&mut self, topic: &str) {
        *self = NavigationState::Topic(topic.to_owned());
    }

    /// Selecciona un subtema del tema activo. Desde la portada no hace nada.
    pub fn go_to_sub_topic(&mut self, sub_topic: &str) {
        let topic = match self.active_topic() {
            Some(t) => t.to_owned(),
            None => return,
        };
        *self = NavigationState::SubTopic {
            topic,
            sub_topic: sub_topic.to_owned(),
        };
    }

    pub fn go_home(&mut self) {
        *self = NavigationState::Home;
    }

    pub fn is_home(&self) -> bool {
        matches!(self, NavigationState::Home)
    }

    pub fn active_topic(&self) -> Option<&str> {
        match self {
            NavigationState::Home => None,
            NavigationState::Topic(t) => Some(t),
            NavigationState::SubTopic { topic, .. } => Some(topic),
        }
    }

    pub fn active_sub_topic(&self) -> Option<&str> {
        match self {
            NavigationState::SubTopic { sub_topic, .. } => Some(sub_topic),
            _ => None,
        }
    }
}

/// Vista que corresponde al estado de navegación actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    /// Tarjetas de subtemas; `with_page` si el tema tiene además página propia
    TopicMenu { with_page: bool },
    Page,
}

impl RevisionApp {
    pub fn screen(&self) -> Screen {
        let topic = match self.current_topic() {
            Some(t) => t,
            None => return Screen::Home,
        };
        if self.current_sub_topic().is_none() && topic.has_sub_topics() {
            Screen::TopicMenu {
                with_page: topic.page.is_some(),
            }
        } else {
            Screen::Page
        }
    }

    pub fn abrir_tema(&mut self, topic_id: &str) {
        if self.topic(topic_id).is_none() {
            warn!("Tema desconocido '{topic_id}', se ignora");
            return;
        }
        info!("Navegando al tema '{topic_id}'");
        self.navigation.go_to_topic(topic_id);
        self.message.clear();
    }

    pub fn abrir_subtema(&mut self, sub_topic_id: &str) {
        let known = self
            .current_topic()
            .map(|t| t.sub_topic(sub_topic_id).is_some())
            .unwrap_or(false);
        if !known {
            warn!("Subtema desconocido '{sub_topic_id}' en el tema actual, se ignora");
            return;
        }
        info!("Navegando al subtema '{sub_topic_id}'");
        self.navigation.go_to_sub_topic(sub_topic_id);
        self.message.clear();
    }

    pub fn volver_al_inicio(&mut self) {
        info!("Volviendo a la portada");
        self.navigation.go_home();
        self.message.clear();
    }

    /// Migas de pan: `[Accueil, Tema, Subtema]` con los títulos del contenido
    pub fn breadcrumb(&self) -> Vec<String> {
        let mut crumbs = vec!["Accueil".to_owned()];
        if let Some(topic) = self.current_topic() {
            crumbs.push(topic.title.clone());
            if let Some(sub) = self.current_sub_topic() {
                crumbs.push(sub.title.clone());
            }
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_topic_starts_without_sub_topic() {
        let mut nav = NavigationState::default();
        assert!(nav.is_home());
        nav.go_to_topic("representation");
        assert_eq!(nav.active_topic(), Some("representation"));
        assert_eq!(nav.active_sub_topic(), None);
    }

    #[test]
    fn sub_topic_is_scoped_to_active_topic() {
        let mut nav = NavigationState::default();
        nav.go_to_topic("architecture");
        nav.go_to_sub_topic("von-neumann");
        assert_eq!(
            nav,
            NavigationState::SubTopic {
                topic: "architecture".into(),
                sub_topic: "von-neumann".into()
            }
        );
        nav.go_to_sub_topic("operating-system");
        assert_eq!(nav.active_topic(), Some("architecture"));
        assert_eq!(nav.active_sub_topic(), Some("operating-system"));
    }

    #[test]
    fn sub_topic_from_home_is_ignored() {
        let mut nav = NavigationState::Home;
        nav.go_to_sub_topic("numeration");
        assert!(nav.is_home());
    }

    #[test]
    fn go_home_clears_sub_topic() {
        let mut nav = NavigationState::default();
        nav.go_to_topic("representation");
        nav.go_to_sub_topic("media");
        nav.go_home();
        assert!(nav.is_home());
        assert_eq!(nav.active_sub_topic(), None);

        nav.go_to_topic("representation");
        assert_eq!(nav.active_sub_topic(), None);
    }

    #[test]
    fn app_ignores_unknown_ids() {
        let mut app = RevisionApp::new().expect("contenido válido");
        app.abrir_tema("no-existe");
        assert!(app.navigation.is_home());

        app.abrir_tema("algorithmique");
        app.abrir_subtema("numeration"); // es de otro tema
        assert_eq!(app.navigation, NavigationState::Topic("algorithmique".into()));
    }

    #[test]
    fn topic_with_page_and_sub_topics_shows_both() {
        let yaml = r#"
title: T
tagline: t
footer: f
welcome: w
topics:
  - id: archi
    title: Architecture
    page:
      heading: Vue d'ensemble
      lesson: "..."
      quiz:
        section: archi
        questions:
          - question: "Combien de bits dans un octet ?"
            options:
              - { value: a, text: "4" }
              - { value: b, text: "8" }
        correct_answers: { q1: b }
    sub_topics:
      - id: cpu
        title: Processeur
        page:
          heading: Le processeur
          lesson: "..."
"#;
        let content = crate::data::parse_content(yaml).expect("válido");
        let mut app = RevisionApp::with_content(content);
        assert_eq!(app.screen(), Screen::Home);

        app.abrir_tema("archi");
        assert_eq!(app.screen(), Screen::TopicMenu { with_page: true });
        let page = app.current_page().expect("página del tema");
        assert_eq!(page.heading, "Vue d'ensemble");
        assert!(page.quiz.is_some());

        app.abrir_subtema("cpu");
        assert_eq!(app.screen(), Screen::Page);
        assert_eq!(app.current_page().map(|p| p.heading.as_str()), Some("Le processeur"));
    }

    #[test]
    fn screen_follows_embedded_content() {
        let mut app = RevisionApp::new().expect("contenido válido");
        app.abrir_tema("representation");
        assert_eq!(app.screen(), Screen::TopicMenu { with_page: false });
        app.abrir_tema("python");
        assert_eq!(app.screen(), Screen::Page);
    }

    #[test]
    fn breadcrumb_uses_content_titles() {
        let mut app = RevisionApp::new().expect("contenido válido");
        assert_eq!(app.breadcrumb(), vec!["Accueil".to_string()]);

        app.abrir_tema("representation");
        app.abrir_subtema("numeration");
        assert_eq!(
            app.breadcrumb(),
            vec![
                "Accueil".to_string(),
                "Représentation des données".to_string(),
                "Systèmes de numération".to_string()
            ]
        );

        app.volver_al_inicio();
        assert_eq!(app.breadcrumb().len(), 1);
    }
}

use super::*;

impl RevisionApp {
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.content.topics.iter().find(|t| t.id == id)
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.topic(self.navigation.active_topic()?)
    }

    pub fn current_sub_topic(&self) -> Option<&SubTopic> {
        let sub = self.navigation.active_sub_topic()?;
        self.current_topic()?.sub_topic(sub)
    }

    /// Página a mostrar: la del subtema si hay uno, si no la del tema
    pub fn current_page(&self) -> Option<&Page> {
        match self.current_sub_topic() {
            Some(sub) => Some(&sub.page),
            None => self.current_topic()?.page.as_ref(),
        }
    }

    // Todas las páginas, en el orden del contenido
    pub fn all_pages(&self) -> impl Iterator<Item = &Page> {
        self.content
            .topics
            .iter()
            .flat_map(|t| t.page.iter().chain(t.sub_topics.iter().map(|s| &s.page)))
    }

    pub fn all_quizzes(&self) -> impl Iterator<Item = &Quiz> {
        self.all_pages().filter_map(|p| p.quiz.as_ref())
    }

    pub fn quiz(&self, section: &str) -> Option<&Quiz> {
        self.all_quizzes().find(|q| q.section == section)
    }
}

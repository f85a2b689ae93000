use super::*;

impl RevisionApp {
    pub fn topic_cards(&self) -> Vec<TopicCard> {
        self.content
            .topics
            .iter()
            .map(|t| {
                let sections: Vec<&str> = t
                    .page
                    .iter()
                    .chain(t.sub_topics.iter().map(|s| &s.page))
                    .filter_map(|p| p.quiz.as_ref())
                    .map(|q| q.section.as_str())
                    .collect();
                TopicCard {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    summary: t.summary.clone(),
                    quiz_count: sections.len(),
                    submitted_count: self.submitted_among(&sections),
                }
            })
            .collect()
    }

    /// Tarjetas de los subtemas del tema activo
    pub fn sub_topic_cards(&self) -> Vec<TopicCard> {
        let topic = match self.current_topic() {
            Some(t) => t,
            None => return Vec::new(),
        };
        topic
            .sub_topics
            .iter()
            .map(|s| {
                let sections: Vec<&str> =
                    s.page.quiz.iter().map(|q| q.section.as_str()).collect();
                TopicCard {
                    id: s.id.clone(),
                    title: s.title.clone(),
                    summary: s.summary.clone(),
                    quiz_count: sections.len(),
                    submitted_count: self.submitted_among(&sections),
                }
            })
            .collect()
    }

    pub fn quiz_overview(&self) -> QuizOverview {
        let mut overview = QuizOverview {
            quiz_count: self.all_quizzes().count(),
            ..QuizOverview::default()
        };
        for quiz in self.all_quizzes() {
            if let Some(r) = self.session.result(&quiz.section) {
                overview.submitted += 1;
                overview.score += r.score;
                overview.total += r.total;
            }
        }
        overview
    }

    pub fn exercise_rows(page: &Page) -> Vec<ExerciseRow> {
        page.exercises
            .iter()
            .enumerate()
            .map(|(i, e)| ExerciseRow {
                number: i + 1,
                level: e.level,
                description: e.description.clone(),
                tasks: e.tasks.clone(),
            })
            .collect()
    }

    fn submitted_among(&self, sections: &[&str]) -> usize {
        sections
            .iter()
            .filter(|s| self.session.result(s).is_some())
            .count()
    }
}

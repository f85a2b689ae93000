// src/view_models.rs

#[derive(Clone, Debug)]
pub struct TopicCard {
    pub id: String,
    pub title: String,
    pub summary: Vec<String>,
    pub quiz_count: usize,      // quiz del tema (página + subtemas)
    pub submitted_count: usize, // cuántos ya enviados en esta sesión
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizOverview {
    pub submitted: usize,
    pub quiz_count: usize,
    pub score: usize,
    pub total: usize,
}

#[derive(Clone, Debug)]
pub struct ExerciseRow {
    pub number: usize, // 1-based
    pub level: u8,
    pub description: String,
    pub tasks: Vec<String>,
}

impl TopicCard {
    pub fn label(&self) -> String {
        if self.quiz_count == 0 {
            self.title.clone()
        } else if self.submitted_count == self.quiz_count {
            format!("{} ✅", self.title)
        } else {
            format!("{} ({}/{} quiz)", self.title, self.submitted_count, self.quiz_count)
        }
    }
}

impl QuizOverview {
    pub fn label(&self) -> String {
        if self.submitted == 0 {
            "Aucun quiz terminé pour l'instant".to_owned()
        } else {
            format!(
                "Quiz terminés : {}/{} · score cumulé {}/{}",
                self.submitted, self.quiz_count, self.score, self.total
            )
        }
    }
}

impl ExerciseRow {
    pub fn level_label(&self) -> String {
        format!("Niveau {}", self.level)
    }
}

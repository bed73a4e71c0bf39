use tracing::debug;

use crate::models::{grade, group_name, QuizQuestion, QuizScore, QuizSelections};
use crate::page::Page;

pub struct QuizGrader {
    questions: Vec<QuizQuestion>,
    selections: QuizSelections,
    result: Option<String>,
}

impl QuizGrader {
    /// Requires the quiz container, the submit control and the result region.
    pub fn init(page: &Page) -> Option<Self> {
        let region = page.quiz.as_ref()?;
        if !region.submit || !region.result {
            return None;
        }
        Some(Self::new(region.questions.clone()))
    }

    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            selections: QuizSelections::new(),
            result: None,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Check `value` in the group of `question`, replacing any earlier choice.
    /// Values that are not options of that group are ignored.
    pub fn select(&mut self, question: usize, value: &str) -> bool {
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if !q.options.iter().any(|o| o.value == value) {
            return false;
        }
        self.selections.insert(group_name(question), value.to_string());
        true
    }

    pub fn selected(&self, question: usize) -> Option<&str> {
        self.selections.get(&group_name(question)).map(String::as_str)
    }

    /// Grade the current selections and show the result line.
    pub fn on_submit(&mut self) -> QuizScore {
        let score = grade(&self.questions, &self.selections);
        debug!(score = score.score, total = score.total, "Quiz submitted");
        self.result = Some(score.to_string());
        score
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{builtin_questions, QuizTier};
    use crate::page::QuizRegion;

    fn grader() -> QuizGrader {
        QuizGrader::init(&Page::builtin()).unwrap()
    }

    #[test]
    fn test_two_correct_is_nice_job() {
        let mut quiz = grader();
        assert!(quiz.select(0, "aluminum-can"));
        assert!(quiz.select(1, "waterways"));
        assert!(quiz.select(2, "bury"));

        let score = quiz.on_submit();
        assert_eq!(score.score, 2);
        assert_eq!(score.tier(), QuizTier::NiceJob);
        assert!(quiz.result().unwrap().starts_with("You scored 2 out of 3. Nice job!"));
    }

    #[test]
    fn test_all_correct_is_perfect() {
        let mut quiz = grader();
        for (i, q) in builtin_questions().iter().enumerate() {
            quiz.select(i, &q.answer);
        }
        let score = quiz.on_submit();
        assert_eq!(score.score, score.total);
        assert_eq!(score.tier(), QuizTier::Perfect);
    }

    #[test]
    fn test_later_selection_replaces_earlier() {
        let mut quiz = grader();
        quiz.select(0, "plastic-bag");
        quiz.select(0, "aluminum-can");
        assert_eq!(quiz.selected(0), Some("aluminum-can"));
        assert_eq!(quiz.on_submit().score, 1);
    }

    #[test]
    fn test_invalid_selection_ignored() {
        let mut quiz = grader();
        assert!(!quiz.select(0, "waterways"));
        assert!(!quiz.select(7, "aluminum-can"));
        assert_eq!(quiz.selected(0), None);
    }

    #[test]
    fn test_unanswered_submit() {
        let mut quiz = grader();
        assert!(quiz.result().is_none());
        let score = quiz.on_submit();
        assert_eq!(score.score, 0);
        assert_eq!(
            quiz.result(),
            Some("You scored 0 out of 3. Keep learning—every small step helps our community.")
        );
    }

    #[test]
    fn test_missing_result_region_is_inactive() {
        let page = Page {
            quiz: Some(QuizRegion {
                questions: builtin_questions(),
                submit: true,
                result: false,
            }),
            ..Page::builtin()
        };
        assert!(QuizGrader::init(&page).is_none());
    }
}

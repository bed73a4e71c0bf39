use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum score (short of perfect) that earns the "nice job" message.
const NICE_JOB_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
}

/// A question group. `answer` is the value of the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub answer: String,
}

/// Group name of the question at `index`: "q1", "q2", ...
pub fn group_name(index: usize) -> String {
    format!("q{}", index + 1)
}

/// Selected option value per group name. At most one per group.
pub type QuizSelections = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTier {
    Perfect,
    NiceJob,
    KeepLearning,
}

impl QuizTier {
    pub fn message(&self) -> &'static str {
        match self {
            QuizTier::Perfect => "Perfect! You're a recycling pro.",
            QuizTier::NiceJob => "Nice job! A few tweaks and you'll be a sustainability expert.",
            QuizTier::KeepLearning => "Keep learning—every small step helps our community.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn tier(&self) -> QuizTier {
        if self.score == self.total {
            QuizTier::Perfect
        } else if self.score >= NICE_JOB_THRESHOLD {
            QuizTier::NiceJob
        } else {
            QuizTier::KeepLearning
        }
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You scored {} out of {}. {}",
            self.score,
            self.total,
            self.tier().message()
        )
    }
}

/// Count the groups whose selected value equals the correct answer.
/// Unanswered groups simply don't count.
pub fn grade(questions: &[QuizQuestion], selections: &QuizSelections) -> QuizScore {
    let score = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| selections.get(&group_name(*i)) == Some(&q.answer))
        .count();

    QuizScore {
        score,
        total: questions.len(),
    }
}

fn option(value: &str, label: &str) -> QuizOption {
    QuizOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// The recycling quiz shown on the built-in page.
pub fn builtin_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            prompt: "Which item belongs in most curbside recycling bins?".to_string(),
            options: vec![
                option("plastic-bag", "Plastic grocery bag"),
                option("aluminum-can", "Rinsed aluminum can"),
                option("greasy-box", "Greasy pizza box"),
            ],
            answer: "aluminum-can".to_string(),
        },
        QuizQuestion {
            prompt: "Where does litter dropped in a parking lot often end up?".to_string(),
            options: vec![
                option("landfill", "Straight to the landfill"),
                option("nowhere", "It breaks down harmlessly"),
                option("waterways", "Storm drains and the bayou"),
            ],
            answer: "waterways".to_string(),
        },
        QuizQuestion {
            prompt: "What is the best way to cut single-use plastic?".to_string(),
            options: vec![
                option("reusable", "Carry a reusable bottle and bag"),
                option("burn", "Burn plastic at home"),
                option("bury", "Bury it in the backyard"),
            ],
            answer: "reusable".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[Option<&str>]) -> QuizSelections {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (group_name(i), v.to_string())))
            .collect()
    }

    #[test]
    fn test_group_name() {
        assert_eq!(group_name(0), "q1");
        assert_eq!(group_name(2), "q3");
    }

    #[test]
    fn test_grade_two_of_three_is_nice_job() {
        let questions = builtin_questions();
        let result = grade(
            &questions,
            &answers(&[Some("aluminum-can"), Some("waterways"), Some("burn")]),
        );
        assert_eq!(result, QuizScore { score: 2, total: 3 });
        assert_eq!(result.tier(), QuizTier::NiceJob);
        assert_eq!(
            result.to_string(),
            "You scored 2 out of 3. Nice job! A few tweaks and you'll be a sustainability expert."
        );
    }

    #[test]
    fn test_grade_all_correct_is_perfect() {
        let questions = builtin_questions();
        let result = grade(
            &questions,
            &answers(&[Some("aluminum-can"), Some("waterways"), Some("reusable")]),
        );
        assert_eq!(result.score, 3);
        assert_eq!(result.tier(), QuizTier::Perfect);
        assert_eq!(result.to_string(), "You scored 3 out of 3. Perfect! You're a recycling pro.");
    }

    #[test]
    fn test_grade_unanswered_counts_as_incorrect() {
        let questions = builtin_questions();
        let result = grade(&questions, &answers(&[Some("aluminum-can"), None, None]));
        assert_eq!(result.score, 1);
        assert_eq!(result.tier(), QuizTier::KeepLearning);

        let none = grade(&questions, &QuizSelections::new());
        assert_eq!(none, QuizScore { score: 0, total: 3 });
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(QuizScore { score: 0, total: 0 }.tier(), QuizTier::Perfect);
        assert_eq!(QuizScore { score: 2, total: 5 }.tier(), QuizTier::NiceJob);
        assert_eq!(QuizScore { score: 1, total: 5 }.tier(), QuizTier::KeepLearning);
    }
}

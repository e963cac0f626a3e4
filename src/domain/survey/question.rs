//! Static question catalog.
//!
//! The assessment presents a fixed, ordered set of questions, each with
//! exactly four options mapped positionally to the labels A, B, C and D.
//! The catalog is embedded in the binary and parsed once on first access.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One catalog question with its four labelled options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based question id, also the question's position in the form.
    pub id: u32,
    pub title: String,
    /// Exactly four options, positionally mapped to A, B, C, D.
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionsFile {
    questions: Vec<Question>,
}

static CATALOG: Lazy<Vec<Question>> = Lazy::new(|| {
    let file: QuestionsFile = serde_json::from_str(include_str!("questions.json"))
        .expect("embedded questions.json must be valid");
    for question in &file.questions {
        assert_eq!(
            question.options.len(),
            4,
            "question {} must have exactly four options",
            question.id
        );
    }
    file.questions
});

/// All catalog questions in form order.
pub fn questions() -> &'static [Question] {
    &CATALOG
}

//! Request and response bodies for the course/quiz API.
//!
//! List endpoints are not typed here: their payloads go through the
//! renderer, which tolerates both bare arrays and wrapped collections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::models::{Answer, AttemptId, Question};

/// Body of `POST /test/answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestAnswerSubmission {
    pub attempt_id: AttemptId,
    pub question_id: i64,
    pub selected_option: Answer,
}

/// Body of the legacy `POST /answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyAnswer {
    pub question_id: i64,
    pub user_answer: Answer,
}

/// Response of the legacy `POST /answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyVerdict {
    #[serde(default)]
    pub is_correct: bool,
}

/// Response of `GET /test/start`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedAttempt {
    #[serde(default)]
    attempt_id: Value,
}

impl StartedAttempt {
    pub fn attempt_id(self) -> Option<AttemptId> {
        AttemptId::from_value(self.attempt_id)
    }
}

/// Response of `GET /test/finish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedAttempt {
    /// Opaque score; servers send either a number or a formatted string.
    #[serde(default)]
    pub score: Option<Value>,
}

impl FinishedAttempt {
    pub fn score_label(&self) -> String {
        match &self.score {
            None | Some(Value::Null) => "unknown".to_string(),
            Some(Value::String(s)) if s.is_empty() => "unknown".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TestBody {
    #[serde(default)]
    questions: Option<Vec<Question>>,
}

#[derive(Debug, Deserialize)]
struct TestEnvelope {
    #[serde(default)]
    test: Option<TestBody>,
    #[serde(default)]
    questions: Option<Vec<Question>>,
}

/// Extract the ordered question list from `GET /test/get`.
///
/// Accepts `{test: {questions}}` and `{questions}`; anything else yields an
/// empty list.
pub fn questions_from_test(payload: &str) -> Result<Vec<Question>> {
    let envelope: TestEnvelope = serde_json::from_str(payload)?;
    Ok(envelope
        .test
        .and_then(|test| test.questions)
        .or(envelope.questions)
        .unwrap_or_default())
}

/// Body of `POST /teacher/course/create`. The server expects these exact
/// capitalized field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Desc")]
    pub description: String,
    #[serde(rename = "TeacherID")]
    pub teacher_id: i64,
}

/// Body of `POST /teacher/question/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

/// Body of `POST /teacher/question/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuestion {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

/// Body of `POST /teacher/test/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTest {
    pub course_id: i64,
    pub name: String,
    pub question_ids: Vec<i64>,
}

/// Body of `POST /teacher/test/questions/reorder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderQuestions {
    pub test_id: i64,
    pub question_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_questions_from_nested_test() {
        let questions =
            questions_from_test(r#"{"test":{"id":3,"questions":[{"id":1,"text":"a"}]}}"#).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "a");
    }

    #[test]
    fn test_questions_from_flat_payload() {
        let questions =
            questions_from_test(r#"{"questions":[{"id":1,"text":"a"},{"id":2,"text":"b"}]}"#)
                .unwrap();
        assert_eq!(questions.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_questions_missing_is_empty() {
        assert!(questions_from_test(r#"{"test":{"id":3}}"#).unwrap().is_empty());
        assert!(questions_from_test("{}").unwrap().is_empty());
        assert!(questions_from_test("not json").is_err());
    }

    #[test]
    fn test_started_attempt() {
        let started: StartedAttempt = serde_json::from_str(r#"{"attempt_id":42}"#).unwrap();
        assert_eq!(started.attempt_id().unwrap().to_string(), "42");

        let empty: StartedAttempt = serde_json::from_str("{}").unwrap();
        assert!(empty.attempt_id().is_none());
    }

    #[test]
    fn test_score_label() {
        let numeric = FinishedAttempt { score: Some(json!(80.5)) };
        assert_eq!(numeric.score_label(), "80.5");
        let formatted = FinishedAttempt { score: Some(json!("75.00%")) };
        assert_eq!(formatted.score_label(), "75.00%");
        let missing: FinishedAttempt = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.score_label(), "unknown");
    }

    #[test]
    fn test_create_course_field_names() {
        let body = CreateCourse {
            name: "Math".to_string(),
            description: "Basics".to_string(),
            teacher_id: 7,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"Name": "Math", "Desc": "Basics", "TeacherID": 7})
        );
    }

    #[test]
    fn test_submission_body_shape() {
        let body = TestAnswerSubmission {
            attempt_id: AttemptId::from_value(json!(9)).unwrap(),
            question_id: 3,
            selected_option: Answer::Option(1),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"attempt_id": 9, "question_id": 3, "selected_option": 1})
        );
    }
}

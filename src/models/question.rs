use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::text_or_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "de::option_list")]
    pub options: Vec<String>,
    /// Only present in authoring views.
    #[serde(default, deserialize_with = "de::optional_index")]
    pub correct_option: Option<usize>,
}

impl Question {
    /// Questions without options take a free-text answer.
    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_correct_option(&self, index: usize) -> bool {
        self.correct_option == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let question: Question = serde_json::from_str(r#"{"id":4,"text":"2+2?"}"#).unwrap();
        assert_eq!(question.id, 4);
        assert!(question.title.is_none());
        assert!(question.is_free_text());
        assert!(!question.is_correct_option(0));
    }

    #[test]
    fn test_correct_option_marks_index() {
        let question: Question = serde_json::from_str(
            r#"{"id":1,"title":"Sum","text":"2+2?","options":["3","4"],"correct_option":1}"#,
        )
        .unwrap();
        assert!(!question.is_free_text());
        assert!(question.is_correct_option(1));
        assert!(!question.is_correct_option(0));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let question: Question = serde_json::from_str(
            r#"{"id":7,"title":null,"text":null,"options":null,"correct_option":null}"#,
        )
        .unwrap();
        assert!(question.title.is_none());
        assert_eq!(question.text, "");
        assert!(question.is_free_text());
        assert!(question.correct_option.is_none());
    }

    #[test]
    fn test_negative_correct_option_marks_nothing() {
        let question: Question =
            serde_json::from_str(r#"{"id":7,"text":"?","options":["a","b"],"correct_option":-1}"#)
                .unwrap();
        assert!(question.correct_option.is_none());
        assert!(!question.is_correct_option(0));
        assert!(!question.is_correct_option(1));
    }

    #[test]
    fn test_odd_option_entries_keep_their_slot() {
        let question: Question = serde_json::from_str(
            r#"{"id":7,"text":"?","options":["a",null,3],"correct_option":2}"#,
        )
        .unwrap();
        assert_eq!(question.options, vec!["a", "", "3"]);
        assert!(question.is_correct_option(2));
    }
}

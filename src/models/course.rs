use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_are_absent() {
        let course: Course =
            serde_json::from_str(r#"{"id":3,"name":null,"description":null}"#).unwrap();
        assert_eq!(course.id, 3);
        assert!(course.name.is_none());
        assert!(course.description.is_none());
    }
}

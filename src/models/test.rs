use serde::{Deserialize, Serialize};

use super::de;

/// A test inside a course. The owning course is implied by the query that
/// fetched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub name: Option<String>,
}

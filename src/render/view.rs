//! Payload → view model.
//!
//! Nothing in here touches a terminal; adapters in `render::text` and
//! `ui::list` draw the resulting [`ListView`].

use serde_json::Value;

use crate::error::Result;
use crate::models::{Course, Question, Test};

const UNTITLED: &str = "Untitled";
const NO_DESCRIPTION: &str = "No description";

/// Entity category of a list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Courses,
    Tests,
    Questions,
}

impl Kind {
    /// Field holding the collection when the payload is an object.
    pub fn collection_field(self) -> &'static str {
        match self {
            Kind::Courses => "courses",
            Kind::Tests => "tests",
            Kind::Questions => "questions",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Kind::Courses => "No courses.",
            Kind::Tests => "No tests in this course.",
            Kind::Questions => "No questions.",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cards carry an action the user can trigger (drill into a course,
    /// start a test).
    pub interactive: bool,
}

impl RenderOptions {
    pub fn interactive() -> Self {
        Self { interactive: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    OpenCourse(i64),
    StartTest(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub fields: Vec<Field>,
    pub options: Vec<OptionLine>,
    pub action: Option<CardAction>,
}

impl Card {
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Empty(&'static str),
    Cards(Vec<Card>),
}

/// Expandable view of the payload a list was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawJson {
    payload: Value,
    expanded: bool,
}

impl RawJson {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Hide JSON"
        } else {
            "Show raw JSON"
        }
    }

    /// Pretty-printed payload, present only while expanded.
    pub fn block(&self) -> Option<String> {
        if !self.expanded {
            return None;
        }
        Some(serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub kind: Kind,
    pub body: ListBody,
    pub raw: RawJson,
}

impl ListView {
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            ListBody::Cards(cards) => cards,
            ListBody::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ListBody::Empty(_))
    }

    pub fn action(&self, index: usize) -> Option<CardAction> {
        self.cards().get(index).and_then(|card| card.action)
    }
}

/// Parse `payload` and build the view for `kind`.
///
/// Malformed JSON is returned as an error for the caller to show in place
/// of the list.
pub fn render(payload: &str, kind: Kind, options: RenderOptions) -> Result<ListView> {
    let value: Value = serde_json::from_str(payload)?;
    render_value(value, kind, options)
}

pub fn render_value(payload: Value, kind: Kind, options: RenderOptions) -> Result<ListView> {
    let items = collection(&payload, kind);
    let body = if items.is_empty() {
        ListBody::Empty(kind.placeholder())
    } else {
        let cards = items
            .iter()
            .map(|item| card(item, kind, options))
            .collect::<Result<Vec<_>>>()?;
        ListBody::Cards(cards)
    };

    Ok(ListView {
        kind,
        body,
        raw: RawJson::new(payload),
    })
}

fn collection(payload: &Value, kind: Kind) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get(kind.collection_field())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

fn card(item: &Value, kind: Kind, options: RenderOptions) -> Result<Card> {
    let card = match kind {
        Kind::Courses => course_card(serde_json::from_value(item.clone())?, options),
        Kind::Tests => test_card(serde_json::from_value(item.clone())?, options),
        Kind::Questions => question_card(serde_json::from_value(item.clone())?),
    };
    Ok(card)
}

fn course_card(course: Course, options: RenderOptions) -> Card {
    Card {
        title: title_or_untitled(course.name),
        fields: vec![
            Field {
                label: "ID",
                value: course.id.to_string(),
            },
            Field {
                label: "Description",
                value: course
                    .description
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            },
        ],
        options: Vec::new(),
        action: options
            .interactive
            .then_some(CardAction::OpenCourse(course.id)),
    }
}

fn test_card(test: Test, options: RenderOptions) -> Card {
    Card {
        title: title_or_untitled(test.name),
        fields: vec![Field {
            label: "ID",
            value: test.id.to_string(),
        }],
        options: Vec::new(),
        action: options.interactive.then_some(CardAction::StartTest(test.id)),
    }
}

fn question_card(question: Question) -> Card {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| OptionLine {
            text: text.clone(),
            correct: question.is_correct_option(index),
        })
        .collect();

    Card {
        title: title_or_untitled(question.title),
        fields: vec![
            Field {
                label: "ID",
                value: question.id.to_string(),
            },
            Field {
                label: "Text",
                value: question.text,
            },
        ],
        options,
        action: None,
    }
}

fn title_or_untitled(title: Option<String>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

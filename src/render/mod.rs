//! Response rendering: JSON payloads become [`ListView`]s, which adapters
//! draw as text or as terminal widgets.

pub mod text;
mod view;

pub use view::{
    render, render_value, Card, CardAction, Field, Kind, ListBody, ListView, OptionLine,
    RawJson, RenderOptions,
};

use crate::error::Result;

/// Contents of one output area.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel {
    #[default]
    Blank,
    /// Plain response text.
    Message(String),
    List(ListView),
    /// Inline error shown in place of the expected output.
    Error(String),
}

impl Panel {
    pub fn from_list(result: Result<ListView>) -> Self {
        match result {
            Ok(view) => Panel::List(view),
            Err(e) => Panel::Error(e.to_string()),
        }
    }

    pub fn list(&self) -> Option<&ListView> {
        match self {
            Panel::List(view) => Some(view),
            _ => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ListView> {
        match self {
            Panel::List(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Panel::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Flip the raw-JSON view of a list panel. Other panels are unchanged.
    pub fn toggle_raw(&mut self) {
        if let Some(view) = self.list_mut() {
            view.raw.toggle();
        }
    }
}

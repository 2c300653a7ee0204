//! Plain-text adapter used by the command line surface.

use std::fmt::Write;

use super::{ListBody, ListView, Panel};

const CORRECT_MARKER: &str = "[x]";
const OPTION_MARKER: &str = "[ ]";

pub fn format_list(view: &ListView) -> String {
    let mut out = String::new();

    match &view.body {
        ListBody::Empty(placeholder) => {
            let _ = writeln!(out, "{}", placeholder);
        }
        ListBody::Cards(cards) => {
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", card.title);
                for field in &card.fields {
                    let _ = writeln!(out, "  {}: {}", field.label, field.value);
                }
                for option in &card.options {
                    let marker = if option.correct {
                        CORRECT_MARKER
                    } else {
                        OPTION_MARKER
                    };
                    let _ = writeln!(out, "    {} {}", marker, option.text);
                }
            }
        }
    }

    out.push('\n');
    let _ = writeln!(out, "-- {} --", view.raw.label());
    if let Some(block) = view.raw.block() {
        let _ = writeln!(out, "{}", block);
    }
    out
}

pub fn format_panel(panel: &Panel) -> String {
    match panel {
        Panel::Blank => String::new(),
        Panel::Message(text) => format!("{}\n", text),
        Panel::List(view) => format_list(view),
        Panel::Error(message) => format!("{}\n", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, Kind, RenderOptions};

    #[test]
    fn test_format_course_card() {
        let view = render(r#"{"courses":[{"id":1,"name":"Math"}]}"#, Kind::Courses, RenderOptions::default())
            .unwrap();
        let text = format_list(&view);
        assert!(text.starts_with("Math\n  ID: 1\n  Description: No description\n"));
        assert_eq!(text.matches("-- Show raw JSON --").count(), 1);
    }

    #[test]
    fn test_format_empty_with_expanded_json() {
        let mut view = render("[]", Kind::Courses, RenderOptions::default()).unwrap();
        view.raw.toggle();
        let text = format_list(&view);
        assert!(text.starts_with("No courses.\n"));
        assert!(text.contains("-- Hide JSON --\n[]\n"));
    }

    #[test]
    fn test_format_question_options() {
        let view = render(
            r#"[{"id":2,"text":"1+1?","options":["1","2"],"correct_option":1}]"#,
            Kind::Questions,
            RenderOptions::default(),
        )
        .unwrap();
        let text = format_list(&view);
        assert!(text.contains("    [ ] 1\n    [x] 2\n"));
    }

    #[test]
    fn test_format_panel_variants() {
        assert_eq!(format_panel(&Panel::Blank), "");
        assert_eq!(format_panel(&Panel::Message("{\"ok\":true}".into())), "{\"ok\":true}\n");
        assert_eq!(format_panel(&Panel::Error("Error 404: Not Found".into())), "Error 404: Not Found\n");

        let view = render("[]", Kind::Tests, RenderOptions::default()).unwrap();
        assert_eq!(format_panel(&Panel::List(view.clone())), format_list(&view));
    }
}

//! Rendering of a finished classification.
//!
//! [`present`] is a pure function of the result; the widget helpers only
//! decorate what it returns.

use crate::domain::{ClassificationResult, POSITIVE_SENTIMENT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

pub const POSITIVE_LABEL: &str = "Positive Sentiment";
pub const NEGATIVE_LABEL: &str = "Negative Sentiment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentIcon {
    Happy,
    Sad,
}

impl SentimentIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SentimentIcon::Happy => "😊",
            SentimentIcon::Sad => "😞",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPresentation {
    pub label: &'static str,
    pub icon: SentimentIcon,
}

impl ResultPresentation {
    pub fn is_positive(&self) -> bool {
        self.icon == SentimentIcon::Happy
    }

    fn color(&self) -> Color {
        if self.is_positive() { Color::Green } else { Color::Red }
    }
}

/// Maps a verdict to its binary presentation.
///
/// Only the exact label `"positive"` takes the positive branch. Every other
/// value, including labels the backend may add later, renders as negative.
pub fn present(result: &ClassificationResult) -> ResultPresentation {
    match result.sentiment.as_str() {
        POSITIVE_SENTIMENT => ResultPresentation {
            label: POSITIVE_LABEL,
            icon: SentimentIcon::Happy,
        },
        _ => ResultPresentation {
            label: NEGATIVE_LABEL,
            icon: SentimentIcon::Sad,
        },
    }
}

/// Auxiliary fields as `key: value`, sorted by key.
pub fn detail_lines(result: &ClassificationResult) -> Vec<String> {
    result
        .extra
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key}: {text}"),
            other => format!("{key}: {other}"),
        })
        .collect()
}

/// Plain-text form used by the one-shot command-line mode.
pub fn describe(result: &ClassificationResult) -> String {
    let presentation = present(result);
    let mut lines = vec![format!("{} {}", presentation.icon.glyph(), presentation.label)];
    lines.extend(detail_lines(result).into_iter().map(|line| format!("  {line}")));
    lines.join("\n")
}

pub fn render_result(f: &mut Frame, result: &ClassificationResult, area: Rect) {
    let presentation = present(result);
    let style = Style::default().fg(presentation.color());

    let mut lines = vec![Line::from(vec![
        Span::raw(presentation.icon.glyph()),
        Span::raw("  "),
        Span::styled(presentation.label, style.add_modifier(Modifier::BOLD)),
    ])];
    lines.extend(
        detail_lines(result)
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(Color::DarkGray))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Result").border_style(style));
    f.render_widget(widget, area);
}

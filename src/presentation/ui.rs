use crate::application::App;
use crate::domain::SubmissionPhase;
use crate::presentation::render_result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Enter your text here...";

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_submit_button(f, app, chunks[2]);
    render_outcome(f, app, chunks[3]);
    render_status_bar(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("Sentiment Analysis | {}", app.endpoint))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let locked = controller.is_pending();

    let (text, style) = if controller.draft().is_empty() {
        (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
    } else if locked {
        (controller.draft().to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (format!("{}▏", controller.draft()), Style::default())
    };

    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Write text:"));
    f.render_widget(input, area);
}

fn render_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let label = if controller.is_pending() { "[ Analyzing... ]" } else { "[ Predict ]" };
    let style = if controller.can_submit() {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(Line::styled(label, style)), area);
}

fn render_outcome(f: &mut Frame, app: &App, area: Rect) {
    match app.controller.phase() {
        SubmissionPhase::Succeeded(result) => render_result(f, result, area),
        SubmissionPhase::Failed(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Error").border_style(Style::default().fg(Color::Red)));
            f.render_widget(error, area);
        }
        SubmissionPhase::Idle | SubmissionPhase::Pending(_) => {}
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.controller.phase() {
        SubmissionPhase::Pending(id) => format!("Waiting for the server (submission {id})..."),
        _ => "Enter: predict | Alt+Enter: newline | Ctrl+U: clear | Esc/Ctrl+C: quit".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.controller.phase() {
            SubmissionPhase::Idle => Style::default(),
            SubmissionPhase::Pending(_) => Style::default().fg(Color::Yellow),
            SubmissionPhase::Succeeded(_) => Style::default().fg(Color::Green),
            SubmissionPhase::Failed(_) => Style::default().fg(Color::Red),
        });
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controller::tests::FakeClassifier;
    use crate::application::RequestController;
    use crate::domain::{ClassificationResult, ClassifyError};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finished_app(text: &str, outcome: Result<ClassificationResult, ClassifyError>) -> App {
        let mut app = App::new(
            RequestController::new(FakeClassifier::answering(outcome)),
            "http://localhost:5000/api/predict",
        );
        app.controller.set_draft(text);
        app.controller.submit().unwrap();
        assert!(app.controller.wait(Duration::from_secs(5)));
        app
    }

    #[test]
    fn test_idle_screen_shows_placeholder() {
        let app = App::new(
            RequestController::new(FakeClassifier::answering(Ok(ClassificationResult::new("positive")))),
            "http://localhost:5000/api/predict",
        );
        let text = screen(&app);
        assert!(text.contains("Sentiment Analysis"));
        assert!(text.contains("Write text:"));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Predict"));
        assert!(!text.contains("Result"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn test_positive_scenario_renders_positive() {
        let app = finished_app("I love this!", Ok(ClassificationResult::new("positive")));
        let text = screen(&app);
        assert!(text.contains("Positive Sentiment"));
        assert!(text.contains("😊"));
        assert!(!text.contains("Negative Sentiment"));
        assert!(!text.contains("😞"));
        assert!(text.contains("I love this!"));
    }

    #[test]
    fn test_negative_scenario_renders_negative() {
        let app = finished_app("I hate this.", Ok(ClassificationResult::new("negative")));
        let text = screen(&app);
        assert!(text.contains("Negative Sentiment"));
        assert!(text.contains("😞"));
        assert!(!text.contains("Positive Sentiment"));
        assert!(!text.contains("😊"));
    }

    #[test]
    fn test_unreachable_backend_renders_error() {
        let app = finished_app(
            "I love this!",
            Err(ClassifyError::Transport("connection refused".to_string())),
        );
        let text = screen(&app);
        assert!(text.contains("Failed to connect to the server"));
        assert!(!text.contains("connection refused"));
        assert!(!text.contains("Positive Sentiment"));
        assert!(!text.contains("Negative Sentiment"));
    }
}

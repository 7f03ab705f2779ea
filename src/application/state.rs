//! Top-level application state for the terminal client.

use crate::application::RequestController;

/// Everything the UI needs to draw a frame.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tsent::application::{App, RequestController};
/// use tsent::infrastructure::{ClientConfig, HttpClassifier};
///
/// let config = ClientConfig::default();
/// let classifier = HttpClassifier::new(&config).unwrap();
/// let app = App::new(RequestController::new(Arc::new(classifier)), config.predict_url());
/// assert!(!app.should_quit);
/// assert!(app.controller.draft().is_empty());
/// ```
pub struct App {
    /// Owns the draft and the submission phase
    pub controller: RequestController,
    /// Endpoint shown in the header
    pub endpoint: String,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: RequestController, endpoint: impl Into<String>) -> Self {
        Self {
            controller,
            endpoint: endpoint.into(),
            should_quit: false,
        }
    }

    /// Called once per event-loop tick to pick up finished requests.
    pub fn tick(&mut self) -> bool {
        self.controller.poll()
    }

    pub fn quit(&mut self) {
        if self.controller.is_pending() {
            tracing::info!("quitting with a request still in flight; its result will be discarded");
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controller::tests::FakeClassifier;
    use crate::domain::{ClassificationResult, SubmissionPhase};
    use std::time::{Duration, Instant};

    fn app() -> App {
        let classifier = FakeClassifier::answering(Ok(ClassificationResult::new("positive")));
        App::new(RequestController::new(classifier), "http://localhost:5000/api/predict")
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert!(!app.should_quit);
        assert_eq!(app.endpoint, "http://localhost:5000/api/predict");
        assert_eq!(app.controller.phase(), &SubmissionPhase::Idle);
    }

    #[test]
    fn test_tick_picks_up_completion() {
        let mut app = app();
        app.controller.set_draft("I love this!");
        app.controller.submit().unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.controller.is_pending() && Instant::now() < deadline {
            app.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(app.controller.phase().result().is_some());
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = app();
        app.quit();
        assert!(app.should_quit);
    }
}

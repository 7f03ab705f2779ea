//! Submission lifecycle for the sentiment client.
//!
//! The controller owns the draft text and the current `SubmissionPhase`. A
//! submission runs the classifier on a worker thread and reports back over a
//! channel; the UI thread folds completions in by calling [`RequestController::poll`].

use crate::domain::{
    ClassificationResult, ClassifyError, ClassifyResult, ResponseInterpreter, SubmissionId,
    SubmissionPhase, SubmitRejected,
};
use crate::infrastructure::Classifier;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A single keystroke-level change to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Newline,
    Backspace,
    Clear,
}

/// Outcome of one classifier call, tagged with the submission it belongs to.
#[derive(Debug)]
pub struct Completion {
    pub id: SubmissionId,
    pub outcome: ClassifyResult<ClassificationResult>,
}

pub struct RequestController {
    draft: String,
    phase: SubmissionPhase,
    classifier: Arc<dyn Classifier>,
    next_id: u64,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
}

impl RequestController {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            draft: String::new(),
            phase: SubmissionPhase::Idle,
            classifier,
            next_id: 1,
            completion_tx,
            completion_rx,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    /// Applies a keystroke to the draft.
    ///
    /// Input is locked while a request is in flight; returns `false` when the
    /// edit was ignored. Editing after a finished submission returns to `Idle`.
    pub fn edit(&mut self, action: EditAction) -> bool {
        if self.is_pending() {
            return false;
        }
        match action {
            EditAction::Insert(c) => self.draft.push(c),
            EditAction::Newline => self.draft.push('\n'),
            EditAction::Backspace => {
                self.draft.pop();
            }
            EditAction::Clear => self.draft.clear(),
        }
        self.reset_to_idle();
        true
    }

    /// Replaces the whole draft. Same locking rules as [`Self::edit`].
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        if self.is_pending() {
            return false;
        }
        self.draft = text.into();
        self.reset_to_idle();
        true
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    fn check_submit(&self) -> Result<(), SubmitRejected> {
        if self.is_pending() {
            Err(SubmitRejected::AlreadyPending)
        } else if self.draft.trim().is_empty() {
            Err(SubmitRejected::BlankDraft)
        } else {
            Ok(())
        }
    }

    /// Starts classifying the current draft.
    ///
    /// On success the phase is `Pending` before this returns, and exactly one
    /// classifier call has been dispatched. A rejected submit issues no call.
    pub fn submit(&mut self) -> Result<SubmissionId, SubmitRejected> {
        if let Err(reason) = self.check_submit() {
            tracing::debug!(%reason, phase = self.phase.name(), "submit rejected");
            return Err(reason);
        }

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.phase = SubmissionPhase::Pending(id);
        tracing::info!(submission = %id, chars = self.draft.chars().count(), "submission started");

        let classifier = Arc::clone(&self.classifier);
        let tx = self.completion_tx.clone();
        let text = self.draft.clone();
        let spawned = thread::Builder::new()
            .name(format!("classify-{}", id.0))
            .spawn(move || {
                let outcome = classifier.classify(&text);
                // The receiver only goes away when the controller is dropped.
                let _ = tx.send(Completion { id, outcome });
            });

        if let Err(err) = spawned {
            self.complete(Completion {
                id,
                outcome: Err(ClassifyError::Transport(format!("could not start request worker: {err}"))),
            });
        }
        Ok(id)
    }

    /// Folds in any finished calls without blocking. Returns whether the phase changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_rx.try_recv() {
            changed |= self.complete(completion);
        }
        changed
    }

    /// Blocks up to `timeout` for the pending call to finish.
    ///
    /// Returns `true` once the phase has left `Pending`.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if !self.is_pending() {
            return true;
        }
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.complete(completion);
                !self.is_pending()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Applies a finished call to the phase. Completions for anything other
    /// than the pending submission are dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion { id, outcome } = completion;
        if self.phase != SubmissionPhase::Pending(id) {
            tracing::debug!(submission = %id, phase = self.phase.name(), "dropping stale completion");
            return false;
        }

        self.phase = match outcome {
            Ok(result) => {
                tracing::info!(submission = %id, sentiment = %result.sentiment, "classification succeeded");
                SubmissionPhase::Succeeded(result)
            }
            Err(err) => {
                match &err {
                    ClassifyError::Application(_) => {
                        tracing::info!(submission = %id, error = %err, "server rejected classification")
                    }
                    ClassifyError::Transport(_) => {
                        tracing::warn!(submission = %id, error = %err, "classification request failed")
                    }
                }
                SubmissionPhase::Failed(ResponseInterpreter::user_message(&err))
            }
        };
        true
    }

    fn reset_to_idle(&mut self) {
        if matches!(self.phase, SubmissionPhase::Succeeded(_) | SubmissionPhase::Failed(_)) {
            self.phase = SubmissionPhase::Idle;
        }
    }
}

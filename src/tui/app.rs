use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::client::{Generation, PredictionService, SubmissionTracker};
use crate::model::PredictionRequest;

use super::action::Action;
use super::error::AppError;
use super::screens::{IntakeState, SUBMIT_FAILED_NOTICE, draw_intake};
use super::worker::{SubmissionOutcome, SubmissionWorker};

/// How long the event loop waits for input before checking for outcomes.
const TICK: Duration = Duration::from_millis(100);

/// Top-level application state.
pub struct App<S> {
    intake: IntakeState,
    worker: SubmissionWorker<S>,
    tracker: SubmissionTracker,
    should_quit: bool,
}

impl<S: PredictionService> App<S> {
    /// Creates a new `App` with an empty form, submitting through `service`.
    pub fn new(service: S) -> Result<Self, AppError> {
        Ok(Self {
            intake: IntakeState::new(),
            worker: SubmissionWorker::new(service)?,
            tracker: SubmissionTracker::new(),
            should_quit: false,
        })
    }

    /// Main event loop: draw → apply settled outcomes → poll input → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.drain_outcomes();
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_intake(&self.intake, frame, frame.area());
    }

    /// Handles a key event by delegating to the intake screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self.intake.handle_key(key);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Submit(request) => self.submit(request),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Starts a submission, superseding any still in flight.
    fn submit(&mut self, request: PredictionRequest) {
        let generation = self.tracker.begin();
        tracing::info!(generation = generation.get(), "submitting prediction request");
        self.worker.spawn(generation, request);
        self.intake.set_pending(true);
    }

    /// Applies every outcome that has arrived since the last call.
    pub fn drain_outcomes(&mut self) {
        while let Some(outcome) = self.worker.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Waits up to `timeout` for one outcome and applies it.
    ///
    /// Returns `false` if nothing arrived.
    pub fn wait_for_outcome(&mut self, timeout: Duration) -> bool {
        match self.worker.recv_timeout(timeout) {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Applies one outcome if it belongs to the latest submission.
    ///
    /// On failure the previous result stays on screen and a notice opens.
    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let SubmissionOutcome { generation, result } = outcome;
        if !self.tracker.settle(generation) {
            tracing::debug!(
                generation = generation.get(),
                latest = ?self.tracker.latest().map(Generation::get),
                "discarding stale outcome"
            );
            return;
        }
        self.intake.set_pending(false);
        match result {
            Ok(result) => {
                tracing::info!(
                    generation = generation.get(),
                    prediction = %result.prediction,
                    positive = %result.positive_probability,
                    negative = %result.negative_probability,
                    "prediction result"
                );
                self.intake.set_result(result);
            }
            Err(e) => {
                tracing::warn!(generation = generation.get(), error = %e, "error submitting data");
                self.intake.show_notice(SUBMIT_FAILED_NOTICE);
            }
        }
    }

    /// Returns the intake screen state.
    pub fn intake(&self) -> &IntakeState {
        &self.intake
    }

    /// Returns `true` while the latest submission has not settled.
    pub fn in_flight(&self) -> bool {
        self.tracker.in_flight()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

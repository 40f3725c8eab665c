//! Application service driving one wizard run against a report sink.

use rand::Rng;
use thiserror::Error;

use crate::domain::recommendation::{pick_quote, RecommendationResult};
use crate::domain::report::render_report;
use crate::domain::session::SessionRecord;
use crate::domain::wizard::{StepAction, Wizard, WizardError, WizardStep};
use crate::ports::{ReportSink, SinkError};

/// Errors surfaced by [`WizardService::submit`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The report side effect was requested twice. Transitions are
    /// forward-only, so this cannot arise through `submit`; it guards the
    /// single-shot contract of the report append.
    #[error("A report has already been rendered for this session")]
    ReportAlreadyRendered,
}

/// Drives the step sequencer and performs the one side effect of a run:
/// rendering the final report and appending it to the sink.
///
/// The random source is injected so quote selection can be seeded in
/// tests; it never influences classification.
pub struct WizardService<S: ReportSink, R: Rng> {
    wizard: Wizard,
    sink: S,
    rng: R,
    report: Option<String>,
}

impl<S: ReportSink, R: Rng> WizardService<S, R> {
    /// Creates a service for a fresh wizard run.
    pub fn new(sink: S, rng: R) -> Self {
        let wizard = Wizard::new();
        tracing::info!(session_id = %wizard.record().id(), "wizard session started");
        Self {
            wizard,
            sink,
            rng,
            report: None,
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    /// Returns the session record.
    pub fn record(&self) -> &SessionRecord {
        self.wizard.record()
    }

    /// Returns the recommendation once the report step is reached.
    pub fn recommendation(&self) -> Option<&RecommendationResult> {
        self.wizard.recommendation()
    }

    /// Returns the rendered report block once it has been persisted.
    pub fn rendered_report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Returns the sink (for test assertions).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Submits one user action.
    ///
    /// Entering the report step renders the report exactly once and
    /// appends it to the sink before returning.
    ///
    /// # Errors
    ///
    /// - `Wizard` if the action is rejected; the run is unchanged and the
    ///   same step is re-presented
    /// - `Sink` if the report append fails
    pub fn submit(&mut self, action: StepAction) -> Result<WizardStep, ServiceError> {
        let action_name = action.name();
        let step = self.wizard.apply(action).map_err(|err| {
            tracing::debug!(
                step = %self.wizard.step(),
                action = action_name,
                error = %err,
                "action rejected"
            );
            err
        })?;
        tracing::debug!(step = %step, action = action_name, "step transition");

        if step == WizardStep::Report {
            self.render_and_append()?;
        }
        Ok(step)
    }

    /// Renders the report with an attached motivational quote and appends
    /// it to the sink. Single-shot per session.
    fn render_and_append(&mut self) -> Result<(), ServiceError> {
        if self.report.is_some() {
            return Err(ServiceError::ReportAlreadyRendered);
        }

        let quote = pick_quote(&mut self.rng);
        let intake = self.wizard.record().completed().map_err(WizardError::from)?;
        let recommendation = self
            .wizard
            .recommendation()
            .expect("recommendation is computed when the report step is entered")
            .clone()
            .with_motivation(quote);

        let block = render_report(&intake, &recommendation);
        self.sink.append(&block)?;

        tracing::info!(
            session_id = %self.wizard.record().id(),
            tier = %recommendation.tier,
            "session completed, report appended"
        );
        self.report = Some(block);
        Ok(())
    }
}

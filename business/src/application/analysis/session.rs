use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::{AnalysisFailure, AnalysisResult, AnalysisStatus};
use crate::domain::analysis::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::image::services::ImageSource;
use crate::domain::logger::Logger;

#[derive(Default)]
struct SessionState {
    generation: u64,
    status: AnalysisStatus,
}

/// Tracks the analysis a user is currently looking at.
///
/// Every analysis takes a generation ticket when it starts. Only the holder of the
/// latest ticket may publish its outcome; an older call still resolves, but with
/// [`AnalysisError::Superseded`], and leaves the visible status alone. Network calls
/// are never aborted, only ignored. A caller that gives up on the latest analysis
/// returns the session to `Idle`.
pub struct AnalysisSession {
    use_case: Arc<dyn AnalyzeImageUseCase>,
    logger: Arc<dyn Logger>,
    state: Mutex<SessionState>,
}

/// Ticket of a running analysis. Dropped unsettled, it clears the loading state.
struct InFlight<'a> {
    session: &'a AnalysisSession,
    ticket: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.session.lock_state();
        if state.generation == self.ticket && state.status.is_in_progress() {
            self.session
                .logger
                .warn(&format!("Analysis #{} abandoned by its caller", self.ticket));
            state.status = AnalysisStatus::Idle;
        }
    }
}

impl AnalysisSession {
    pub fn new(use_case: Arc<dyn AnalyzeImageUseCase>, logger: Arc<dyn Logger>) -> Self {
        Self {
            use_case,
            logger,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub async fn analyze(
        &self,
        source: Arc<dyn ImageSource>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let in_flight = self.begin();
        let outcome = self.use_case.execute(AnalyzeImageParams { source }).await;
        self.finish(in_flight, outcome)
    }

    /// Clears the visible result and error and invalidates any analysis in flight.
    pub async fn reset(&self) {
        let mut state = self.lock_state();
        state.generation += 1;
        state.status = AnalysisStatus::Idle;
    }

    pub async fn status(&self) -> AnalysisStatus {
        self.lock_state().status.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.lock_state().status.is_in_progress()
    }

    // The lock is never held across an await, so a poisoned state is still consistent.
    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> InFlight<'_> {
        let mut state = self.lock_state();
        state.generation += 1;
        state.status = AnalysisStatus::InProgress;
        self.logger.debug(&format!("Analysis #{} started", state.generation));
        InFlight {
            session: self,
            ticket: state.generation,
            settled: false,
        }
    }

    fn finish(
        &self,
        mut in_flight: InFlight<'_>,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Result<AnalysisResult, AnalysisError> {
        in_flight.settled = true;
        let ticket = in_flight.ticket;

        let mut state = self.lock_state();
        if state.generation != ticket {
            self.logger.info(&format!(
                "Discarding stale analysis #{} (current #{})",
                ticket, state.generation
            ));
            return Err(AnalysisError::Superseded);
        }

        state.status = match &outcome {
            Ok(result) => AnalysisStatus::Succeeded(result.clone()),
            Err(error) => {
                self.logger.error(&format!("Error analyzing image: {:?}", error));
                AnalysisStatus::Failed(AnalysisFailure::from(error))
            }
        };
        outcome
    }
}

//! Last-request-wins bookkeeping shared by the fetch controllers.

use tokio::task::JoinHandle;

/// Tracks the single in-flight task of a controller.
///
/// Each issued request gets a fresh generation. Issuing a new one aborts the
/// previous task, which drops its HTTP future and releases the connection.
/// Completions must still compare their generation against the current one
/// before touching state, because an abort cannot stop a task that has
/// already resumed.
#[derive(Debug, Default)]
pub struct Supersede {
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl Supersede {
    /// Create a handle with no request issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort any in-flight task and return the generation for the next request.
    pub fn issue(&mut self) -> u64 {
        self.abort_in_flight();
        self.generation += 1;
        self.generation
    }

    /// Record the task serving the current generation.
    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.in_flight = Some(handle);
    }

    /// Abort any in-flight task without issuing a new request.
    pub fn cancel(&mut self) -> u64 {
        self.issue()
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the tracked task is still running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!("Aborting superseded request (generation {})", self.generation);
            }
            handle.abort();
        }
    }
}

impl Drop for Supersede {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

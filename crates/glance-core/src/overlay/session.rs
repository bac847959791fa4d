use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::geometry::{BoundingBox, CoordSpace};
use crate::oracle::RecognizedItem;

use super::types::OverlayResult;

/// Identifies the manual slot a pending recognition must complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualTicket {
    pub epoch: u64,
    pub index: usize,
}

#[derive(Debug, Default)]
struct SessionState {
    epoch: u64,
    auto_generation: u64,
    source_key: Option<String>,
    manual: Vec<OverlayResult>,
    auto: Vec<OverlayResult>,
}

/// Owns the overlay result lists for one piece of media.
///
/// In-flight completions hold a [`ManualTicket`] or an auto generation and
/// only apply while those are still current, so a completion that arrives
/// after [`OverlaySession::clear`] or a newer auto scan is dropped.
#[derive(Debug, Default)]
pub struct OverlaySession {
    state: Mutex<SessionState>,
}

impl OverlaySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose completions are reported to the sink under `source_key`.
    pub fn for_source(source_key: impl Into<String>) -> Self {
        let session = Self::default();
        session.lock().source_key = Some(source_key.into());
        session
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn source_key(&self) -> Option<String> {
        self.lock().source_key.clone()
    }

    /// Append a manual placeholder and return the ticket that completes it.
    pub fn begin_manual(&self, bbox: BoundingBox, space: CoordSpace) -> ManualTicket {
        let mut state = self.lock();
        state.manual.push(OverlayResult::placeholder(bbox, space));
        ManualTicket {
            epoch: state.epoch,
            index: state.manual.len() - 1,
        }
    }

    /// Complete the slot behind `ticket`. Returns `false` if it was discarded.
    pub fn complete_manual(
        &self,
        ticket: ManualTicket,
        outcome: &Result<RecognizedItem, String>,
    ) -> bool {
        let mut state = self.lock();
        if state.epoch != ticket.epoch {
            debug!(?ticket, current = state.epoch, "Dropping stale manual result");
            return false;
        }
        let Some(slot) = state.manual.get_mut(ticket.index) else {
            return false;
        };
        match outcome {
            Ok(item) => slot.complete(item.clone()),
            Err(message) => slot.fail(message),
        }
        true
    }

    /// Start a new auto scan: replace the auto list with one placeholder and
    /// return the scan's generation.
    pub fn begin_auto(&self, placeholder_bbox: BoundingBox) -> u64 {
        let mut state = self.lock();
        state.auto_generation += 1;
        state.auto.clear();
        state
            .auto
            .push(OverlayResult::placeholder(placeholder_bbox, CoordSpace::Image));
        state.auto_generation
    }

    /// Install auto results if `generation` is still current.
    pub fn finish_auto(&self, generation: u64, results: Vec<OverlayResult>) -> bool {
        let mut state = self.lock();
        if state.auto_generation != generation {
            debug!(
                generation,
                current = state.auto_generation,
                "Dropping stale auto scan"
            );
            return false;
        }
        state.auto = results;
        true
    }

    /// Drop every result and invalidate all in-flight completions.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.epoch += 1;
        state.auto_generation += 1;
        state.manual.clear();
        state.auto.clear();
    }

    pub fn manual_results(&self) -> Vec<OverlayResult> {
        self.lock().manual.clone()
    }

    pub fn auto_results(&self) -> Vec<OverlayResult> {
        self.lock().auto.clone()
    }

    /// Manual results followed by auto results.
    pub fn results(&self) -> Vec<OverlayResult> {
        let state = self.lock();
        state.manual.iter().chain(state.auto.iter()).cloned().collect()
    }

    /// True while any item still awaits its completion.
    pub fn is_loading(&self) -> bool {
        let state = self.lock();
        state.manual.iter().chain(state.auto.iter()).any(|r| r.loading)
    }
}

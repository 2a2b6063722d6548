// ==========================================
// Shipping Relay Planner - trailer lifecycle controller
// ==========================================
// States: Active (initial) -> Dispatched (terminal). No way back.
// Constraint: once dispatched, trailer_number, seal_number, stacks and
// the overload annotation are frozen for the rest of the relay run.
// Rejections apply no partial mutation.
// ==========================================

use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::relay::{OverloadSource, Trailer};
use crate::engine::error::{TrailerError, TrailerResult};

/// Outcome of a dispatch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Confirmed and dispatched; the trailer is now frozen.
    Dispatched,
    /// The operator backed out (confirm = false). Nothing changed;
    /// this is a normal outcome, not an error.
    Declined,
}

// ==========================================
// TrailerLifecycle - edit/dispatch controller
// ==========================================
pub struct TrailerLifecycle {
    // stateless engine
}

impl TrailerLifecycle {
    pub fn new() -> Self {
        Self {}
    }

    /// Update operator-entered fields on an active trailer.
    ///
    /// Empty or omitted fields are left unchanged.
    ///
    /// # Errors
    /// `AlreadyDispatched` when the trailer is frozen.
    #[instrument(skip(self, trailer), fields(trailer_no = trailer.number))]
    pub fn edit(
        &self,
        trailer: &mut Trailer,
        trailer_number: Option<&str>,
        seal_number: Option<&str>,
    ) -> TrailerResult<()> {
        self.ensure_active(trailer)?;

        if let Some(value) = trailer_number {
            if !value.is_empty() {
                trailer.trailer_number = value.to_string();
            }
        }
        if let Some(value) = seal_number {
            if !value.is_empty() {
                trailer.seal_number = value.to_string();
            }
        }

        Ok(())
    }

    /// Attach or replace the overflow annotation on an active trailer.
    ///
    /// Operator-entered metadata noting that part of this load is
    /// overflow accepted from another location. The allocator never
    /// computes this.
    pub fn annotate_overload(
        &self,
        trailer: &mut Trailer,
        source: OverloadSource,
    ) -> TrailerResult<()> {
        self.ensure_active(trailer)?;
        trailer.overload_source = Some(source);
        Ok(())
    }

    /// Dispatch a trailer.
    ///
    /// Requires an explicit operator confirmation: with `confirm` false
    /// the request is silently ignored (the operator backing out of the
    /// dialog) and `Declined` is returned. On confirmation the trailer
    /// is marked dispatched with the current timestamp and frozen.
    ///
    /// # Errors
    /// `AlreadyDispatched` when the trailer was dispatched earlier.
    #[instrument(skip(self, trailer), fields(trailer_no = trailer.number))]
    pub fn dispatch(&self, trailer: &mut Trailer, confirm: bool) -> TrailerResult<DispatchOutcome> {
        self.ensure_active(trailer)?;

        if !confirm {
            return Ok(DispatchOutcome::Declined);
        }

        trailer.dispatched = true;
        trailer.dispatch_timestamp = Some(Utc::now());
        info!(
            load_id = %trailer.load_id,
            stacks = trailer.stacks,
            "trailer dispatched"
        );

        Ok(DispatchOutcome::Dispatched)
    }

    fn ensure_active(&self, trailer: &Trailer) -> TrailerResult<()> {
        if trailer.is_dispatched() {
            return Err(TrailerError::AlreadyDispatched {
                trailer_no: trailer.number,
            });
        }
        Ok(())
    }
}

impl Default for TrailerLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

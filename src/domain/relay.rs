// ==========================================
// Shipping Relay Planner - relay domain model
// ==========================================
// One relay run groups a date/day batch of orders by location and
// partitions each location's stack volume across trailers.
// Constraint: a session is regenerated whole; it is never incrementally
// mutated across runs.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Fixed trailer capacity in stacks. Every trailer in the fleet carries
// at most this many stacks; there is no per-trailer override.
pub const TRAILER_CAPACITY_STACKS: u32 = 98;

// ==========================================
// OverloadSource - operator overflow note
// ==========================================
// Operator-entered annotation that part of a trailer's load is overflow
// accepted from another location. Metadata only: the allocator never
// computes or moves load between locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadSource {
    pub source_location: String,
    pub stacks: u32,
}

// ==========================================
// Trailer - capacity-bounded transport unit
// ==========================================
// Created by the allocator with 0 < stacks <= TRAILER_CAPACITY_STACKS.
// load_id is assigned once at creation and never reassigned.
// All mutation goes through the lifecycle controller; once dispatched,
// trailer_number, seal_number and stacks are frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trailer {
    pub number: u32,                    // 1-based sequence within its location
    pub stacks: u32,                    // assigned load, in stacks
    pub load_id: String,                // opaque load identifier
    pub trailer_number: String,         // physical trailer number (operator-entered)
    pub seal_number: String,            // seal number (operator-entered)
    pub dispatched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overload_source: Option<OverloadSource>,
}

impl Trailer {
    /// A freshly allocated, still editable trailer.
    pub fn new(number: u32, stacks: u32, load_id: String) -> Self {
        Self {
            number,
            stacks,
            load_id,
            trailer_number: String::new(),
            seal_number: String::new(),
            dispatched: false,
            dispatch_timestamp: None,
            overload_source: None,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        self.dispatched
    }
}

// ==========================================
// LocationPlan - one location's relay view
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPlan {
    pub name: String,            // location name, exactly as grouped
    pub order_ids: Vec<String>,  // orders feeding this location
    pub total_trays: u32,
    pub total_stacks: u32,
    pub trailers: Vec<Trailer>,  // ascending sequence number
}

impl LocationPlan {
    pub fn trailer_count(&self) -> usize {
        self.trailers.len()
    }

    /// Sum of trailer loads. Always equals total_stacks for a freshly
    /// generated plan (allocation preserves volume exactly).
    pub fn allocated_stacks(&self) -> u32 {
        self.trailers.iter().map(|t| t.stacks).sum()
    }
}

// ==========================================
// RelaySession - one full relay run
// ==========================================
// The explicit value replacing any process-wide "current relay" state:
// whichever layer renders or dispatches trailers holds the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySession {
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    pub locations: Vec<LocationPlan>,
}

impl RelaySession {
    pub fn location(&self, name: &str) -> Option<&LocationPlan> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn location_mut(&mut self, name: &str) -> Option<&mut LocationPlan> {
        self.locations.iter_mut().find(|l| l.name == name)
    }

    pub fn total_trailers(&self) -> usize {
        self.locations.iter().map(|l| l.trailers.len()).sum()
    }

    pub fn total_stacks(&self) -> u32 {
        self.locations.iter().map(|l| l.total_stacks).sum()
    }
}

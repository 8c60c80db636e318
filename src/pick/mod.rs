//! Cherry-pick driver
//!
//! - machine - per-commit states and operator responses (pure)
//! - session - results of a run
//! - execute - the pick loop (effectful)

mod execute;
mod machine;
mod session;

pub use execute::{run_pick_session, PickOptions, CONFLICTS_REMAIN, CONFLICT_PROMPT, STATUS_UNREADABLE};
pub use machine::{OperatorResponse, PickState};
pub use session::{PickOutcome, PickRecord, PickSession, SessionEnd};

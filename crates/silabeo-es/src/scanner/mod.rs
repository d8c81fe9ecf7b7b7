// Syllable scanners
//
// One engine iteration runs onset, nucleus and coda in that order. Each step
// takes the scan state by value, consumes zero or more characters and returns
// the state together with the consumed text.

pub mod coda;
pub mod nucleus;
pub mod onset;

use crate::error::SyllabifyError;
use crate::state::ScanState;

/// Result of an infallible scan step: the updated state and the consumed text.
pub type Step<'w> = (ScanState<'w>, String);

/// Result of a scan step that can fail.
pub type ScanResult<'w> = Result<Step<'w>, SyllabifyError>;

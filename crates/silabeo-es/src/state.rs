// Scan state threaded through the onset, nucleus and coda scanners

use silabeo_core::Syllable;

use crate::cursor::Cursor;

/// Everything one scan of one word accumulates.
///
/// Each scanner takes the state by value and hands it back together with
/// the span it consumed, so only one step can touch the cursor at a time.
#[derive(Debug, Clone)]
pub struct ScanState<'w> {
    pub cursor: Cursor<'w>,

    /// Finished syllables in reading order.
    pub syllables: Vec<Syllable>,

    /// Offset of the written accent. Set at most once.
    pub accent: Option<usize>,

    /// True once the accent has been attached to a syllable's nucleus.
    pub stress_found: bool,

    /// Index of the stressed syllable, once known.
    pub stressed: Option<usize>,
}

impl<'w> ScanState<'w> {
    pub fn new(chars: &'w [char]) -> Self {
        Self {
            cursor: Cursor::new(chars),
            syllables: Vec::new(),
            accent: None,
            stress_found: false,
            stressed: None,
        }
    }

    /// Record the written accent at `position`. The first accent wins.
    pub fn record_accent(&mut self, position: usize) {
        if self.accent.is_none() {
            log::trace!("written accent at offset {position}");
            self.accent = Some(position);
        }
    }
}

//! The rolling-row Damerau-Levenshtein engine.
//!
//! Classic dynamic programming over the two decoded sequences, keeping only
//! one live row plus a shadow row of values from two rows back (the
//! transposition rule's lookback), so memory stays proportional to the
//! secondary sequence no matter how long the primary one is.
//!
//! Candidates are evaluated deletion, insertion, substitution with a strict
//! minimum, then transposition with `<=`: ties go to the transposition
//! branch. The reported cost is unaffected by the tie-break; it is kept for
//! compatibility with prior outputs on tied inputs.

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::Direction;
use crate::cost::{Cost, OpCosts};
use crate::decode::Codepoints;

//------------------------------------------------------------------------------
/// Error returned by the checked entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// The scratch buffer cannot hold two DP rows for the secondary sequence.
    #[error("scratch buffer holds {got} cells but two rows of {need} are required")]
    ScratchTooSmall {
        /// Cells one row requires: the secondary codepoint count plus one.
        need: usize,
        /// Cells the caller actually supplied, both rows together.
        got: usize,
    },
}

//------------------------------------------------------------------------------
/// Compute the weighted edit distance between `primary` and `secondary`
/// using a caller-owned scratch buffer.
///
/// `scratch` is split in half: the first half holds the current DP row, the
/// second half retains values from two rows back for the transposition
/// rule. It should hold `2 * (n + 1)` cells, where `n` is the codepoint
/// count of `secondary`; a smaller buffer truncates the computation to the
/// columns that fit, observable through the returned column count. Prior
/// contents are ignored and the buffer is borrowed only for this call, so
/// callers may reuse one allocation across calls.
///
/// Returns the final cost and the number of secondary codepoints processed.
///
/// Malformed UTF-8 and embedded NULs end the affected sequence early; they
/// are never reported as errors (see [`crate::decode`]).
///
/// # Panics
///
/// Panics if `scratch` holds fewer than two cells, which leaves no room
/// for even the empty-prefix column.
pub fn distance_with_scratch<N: Cost>(
    primary: &[u8],
    secondary: &[u8],
    direction: Direction,
    scratch: &mut [N],
    costs: &OpCosts<N>,
) -> (N, usize) {
    let (row, shadow) = scratch.split_at_mut(scratch.len() / 2);
    let fold = costs.case_insensitive;

    // Row 0: turning the empty prefix into j codepoints of `secondary`
    // costs j insertions.
    row[0] = N::ZERO;
    let mut used = 0;
    for _ in Codepoints::new(secondary, direction, fold) {
        if used + 1 >= row.len() {
            break;
        }
        used += 1;
        row[used] = costs.insert.times(used);
    }

    let mut prev_c1 = '\0';
    for (i, c1) in Codepoints::new(primary, direction, fold).enumerate() {
        let i = i + 1;
        // Last row's column 0 is the diagonal predecessor for column 1.
        let mut prev_diag = row[0];
        row[0] = costs.delete.times(i);

        let mut prev_c2 = '\0';
        let mut two_back = N::ZERO;
        for (j, c2) in Codepoints::new(secondary, direction, fold).take(used).enumerate() {
            let j = j + 1;

            let deletion = row[j] + costs.delete;
            let insertion = row[j - 1] + costs.insert;
            let substitution = if c1 == c2 { prev_diag } else { prev_diag + costs.replace };

            let mut best = deletion;
            if insertion < best {
                best = insertion;
            }
            if substitution < best {
                best = substitution;
            }

            // Restricted transposition: the current pair is an adjacent
            // swap of the previous pair.
            if j > 1 && i > 1 && c1 != c2 && c1 == prev_c2 && prev_c1 == c2 {
                let transposition = two_back + costs.transpose;
                if transposition <= best {
                    best = transposition;
                }
            }

            // Shift the bookkeeping before overwriting: the shadow slot
            // becomes next column's two-rows-back reference, the old cell
            // becomes next column's diagonal.
            two_back = shadow[j];
            shadow[j] = prev_diag;
            prev_diag = row[j];
            row[j] = best;

            prev_c2 = c2;
        }
        prev_c1 = c1;
    }

    (row[used], used)
}

/// Like [`distance_with_scratch`], but fails instead of truncating when the
/// scratch buffer cannot hold two full rows for the secondary sequence.
pub fn try_distance_with_scratch<N: Cost>(
    primary: &[u8],
    secondary: &[u8],
    direction: Direction,
    scratch: &mut [N],
    costs: &OpCosts<N>,
) -> Result<(N, usize), DistanceError> {
    let need = Codepoints::new(secondary, direction, costs.case_insensitive).count() + 1;
    if scratch.len() < 2 * need {
        debug!("scratch too small: need {need} cells per row, got {} total", scratch.len());
        return Err(DistanceError::ScratchTooSmall {
            need,
            got: scratch.len(),
        });
    }
    Ok(distance_with_scratch(primary, secondary, direction, scratch, costs))
}

//------------------------------------------------------------------------------
/// Reusable distance computer with per-thread scratch caching.
///
/// Owns the cost table and a thread-local scratch buffer so repeated calls
/// do not reallocate. Each thread gets its own buffer, making the type safe
/// to share across threads while every individual computation stays
/// single-threaded and synchronous.
#[derive(Debug)]
pub struct EditDistance<N: Cost = usize> {
    costs: OpCosts<N>,
    scratch: ThreadLocal<RefCell<Vec<N>>>,
}

impl<N: Cost> Default for EditDistance<N> {
    fn default() -> Self {
        Self::new(OpCosts::default())
    }
}

impl<N: Cost> EditDistance<N> {
    /// Distance computer using `costs`.
    pub fn new(costs: OpCosts<N>) -> Self {
        Self {
            costs,
            scratch: ThreadLocal::new(),
        }
    }

    /// Sets the computer to fold case before comparing.
    pub fn ignore_case(mut self) -> Self {
        self.costs.case_insensitive = true;
        self
    }

    /// Sets the computer to compare codepoints exactly.
    pub fn respect_case(mut self) -> Self {
        self.costs.case_insensitive = false;
        self
    }

    /// The cost table in use.
    pub fn costs(&self) -> &OpCosts<N> {
        &self.costs
    }

    /// Weighted distance between two strings.
    pub fn distance(&self, primary: &str, secondary: &str) -> N {
        let (cost, _) = self.measure(primary.as_bytes(), secondary.as_bytes(), Direction::Forward);
        cost
    }

    /// Weighted distance between two byte buffers walked in `direction`,
    /// plus the number of secondary codepoints processed.
    ///
    /// The column count only falls short of the secondary sequence's
    /// codepoint count when decoding was cut off by malformed bytes or an
    /// embedded NUL.
    pub fn measure(&self, primary: &[u8], secondary: &[u8], direction: Direction) -> (N, usize) {
        // One cell per byte over-reserves for multi-byte codepoints; the
        // engine only touches the columns it decodes.
        let cells = 2 * (secondary.len() + 1);
        let mut scratch = self.scratch.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        if scratch.len() < cells {
            trace!("resizing scratch to {cells} cells");
            scratch.resize(cells, N::ZERO);
        }
        distance_with_scratch(primary, secondary, direction, scratch.as_mut_slice(), &self.costs)
    }
}

// ---------------------------------------------------------------------------
// Convenience free functions
// ---------------------------------------------------------------------------

/// Damerau-Levenshtein distance with default weights: every operation costs
/// one, comparison is case-insensitive.
pub fn distance(primary: &str, secondary: &str) -> usize {
    EditDistance::default().distance(primary, secondary)
}

/// Weighted distance under an explicit cost table.
pub fn distance_with<N: Cost>(primary: &str, secondary: &str, costs: &OpCosts<N>) -> N {
    EditDistance::new(*costs).distance(primary, secondary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

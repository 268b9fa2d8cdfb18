//! The exact-match primitive: binary letter codes read out over a
//! resistive crossbar model.
//!
//! Each Tibetan letter is encoded as the low eight bits of its Unicode
//! scalar value (the high bits are constant across the Tibetan block and
//! carry no information). A category is "written" into a crossbar as one
//! column per member code, each bit stored as a low (`1`) or high (`0`)
//! resistance cell. A query code is applied as a column of read voltages
//! and every column's summed current is compared against
//! [`MATCH_SIGNAL`].
//!
//! The arithmetic is the numeric contract of the reference device and is
//! preserved exactly: a bit that agrees between query and stored code
//! contributes `0.00008` regardless of its value, so a bit-for-bit match
//! sums to `8 × 0.00008 = 0.00064` — the sole acceptance threshold.
//! Mismatched bits contribute `0.002` (read 0 over a low-resistance
//! cell) or `0.0000032` (read 1 over a high-resistance cell). For 8-bit
//! codes no combination of mismatch terms can reach the threshold, which
//! the test suite verifies exhaustively.

/// Read voltage applied for a query bit of 0.
pub const READ_V_ZERO: f64 = 0.2;

/// Read voltage applied for a query bit of 1.
pub const READ_V_ONE: f64 = 0.008;

/// Cell resistance for a stored bit of 1 (low-resistance state).
pub const R_ON: f64 = 100.0;

/// Cell resistance for a stored bit of 0 (high-resistance state).
pub const R_OFF: f64 = 2500.0;

/// Readout of a column whose stored code equals the query bit-for-bit:
/// eight agreeing bit positions at `0.00008` each.
pub const MATCH_SIGNAL: f64 = 0.00064;

/// Tolerance for comparing a readout against [`MATCH_SIGNAL`]. The
/// nearest non-matching readout differs by more than `7e-5`, so this only
/// absorbs floating summation error.
pub const SIGNAL_TOLERANCE: f64 = 1e-9;

/// Width of a letter code in bits.
pub const CODE_BITS: u32 = 8;

/// First code point of the Tibetan Unicode block.
pub const TIBETAN_BLOCK_START: u32 = 0x0F00;

/// Last code point of the Tibetan Unicode block.
pub const TIBETAN_BLOCK_END: u32 = 0x0FFF;

/// Encode a character as its 8-bit letter code.
///
/// Returns `None` for characters outside the Tibetan block; such
/// characters can never be members of any letter category.
///
/// # Examples
///
/// ```
/// use tsheg::crossbar::letter_code;
///
/// assert_eq!(letter_code('ཀ'), Some(0x40));
/// assert_eq!(letter_code('a'), None);
/// ```
pub fn letter_code(c: char) -> Option<u8> {
    let cp = c as u32;
    if (TIBETAN_BLOCK_START..=TIBETAN_BLOCK_END).contains(&cp) {
        Some((cp & 0xFF) as u8)
    } else {
        None
    }
}

/// Code of a character known to lie in the Tibetan block (table letters).
pub(crate) fn block_code(c: char) -> u8 {
    (c as u32 & 0xFF) as u8
}

/// Readout of one column: the query's read voltages summed over the
/// column's cell resistances, most significant bit first.
pub fn column_signal(query: u8, stored: u8) -> f64 {
    let mut signal = 0.0;
    for bit in (0..CODE_BITS).rev() {
        let voltage = if query >> bit & 1 == 0 {
            READ_V_ZERO
        } else {
            READ_V_ONE
        };
        let resistance = if stored >> bit & 1 == 1 { R_ON } else { R_OFF };
        signal += voltage / resistance;
    }
    signal
}

/// Whether a readout is accepted as an exact match.
pub fn is_match_signal(signal: f64) -> bool {
    (signal - MATCH_SIGNAL).abs() < SIGNAL_TOLERANCE
}

/// A crossbar with one column per stored candidate code.
///
/// # Examples
///
/// ```
/// use tsheg::crossbar::Crossbar;
///
/// let bar = Crossbar::write(&[0x40, 0x41, 0x42]);
/// assert_eq!(bar.first_match(0x41), Some(1));
/// assert_eq!(bar.first_match(0x43), None);
/// ```
#[derive(Debug, Clone)]
pub struct Crossbar {
    columns: Vec<u8>,
}

impl Crossbar {
    /// Write candidate codes into the array, one column each.
    pub fn write(codes: &[u8]) -> Self {
        Crossbar {
            columns: codes.to_vec(),
        }
    }

    /// Number of stored columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the array holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Read every column against the query code.
    pub fn readout(&self, query: u8) -> Vec<f64> {
        self.columns
            .iter()
            .map(|&stored| column_signal(query, stored))
            .collect()
    }

    /// Index of the first column whose readout hits [`MATCH_SIGNAL`].
    pub fn first_match(&self, query: u8) -> Option<usize> {
        self.columns
            .iter()
            .position(|&stored| is_match_signal(column_signal(query, stored)))
    }
}

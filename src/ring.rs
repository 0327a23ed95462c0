//! Fixed-capacity ring buffer for decoded codes.
//!
//! The decode engine runs inside an edge interrupt and cannot wait for
//! anyone: completed codes go into a fixed ring of
//! [`MAX_CODES`](crate::consts::MAX_CODES) slots where the oldest entry is
//! silently overwritten on overflow. Data loss under a slow consumer is
//! the defined policy; there is no error path and no allocation.
//!
//! The decode engine is the sole writer and the draining consumer the sole
//! reader. They are kept off each other's slots by the caller (see
//! [`crate::edge`] for the critical-section wiring); this type itself is
//! plain single-threaded storage.

use crate::code::Code;
use crate::consts::MAX_CODES;

/// Circular store of decoded codes with overwrite-oldest semantics.
///
/// A monotonically advancing write cursor selects the next slot to
/// overwrite, wrapping modulo [`MAX_CODES`]. Draining scans forward from
/// the cursor, so codes come out in push order as long as the producer
/// has not lapped the consumer.
#[derive(Debug)]
pub struct CodeRing {
    slots: [Option<Code>; MAX_CODES],
    /// Next slot to overwrite.
    cursor: usize,
}

impl CodeRing {
    /// Creates an empty ring. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; MAX_CODES],
            cursor: 0,
        }
    }

    /// Stores `code` in the slot at the write cursor, overwriting any
    /// unread entry there, and advances the cursor.
    pub fn push(&mut self, code: Code) {
        self.slots[self.cursor] = Some(code);
        self.cursor = (self.cursor + 1) % MAX_CODES;
    }

    /// Removes and returns the oldest stored code.
    ///
    /// Scans from the write cursor forward — oldest-first relative to the
    /// next write point — and empties the first occupied slot. Returns
    /// `None` without touching anything when the ring is empty.
    pub fn drain_oldest(&mut self) -> Option<Code> {
        for n in 0..MAX_CODES {
            let i = (self.cursor + n) % MAX_CODES;
            if self.slots[i].is_some() {
                return self.slots[i].take();
            }
        }
        None
    }

    /// `true` when no codes are waiting.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for CodeRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::consts::{MIN_SYNC_DURATION_US, SYNC_CYCLES};

    /// Runs a real decode so tests push genuine codes, not hand-built ones.
    fn code_with_digits(digits: &str) -> Code {
        let mut decoder = Decoder::new();
        let mut now: u32 = 0;
        let pulse = |decoder: &mut Decoder, duration: u32, now: &mut u32| {
            *now = now.wrapping_add(duration);
            decoder.edge(*now, duration)
        };

        assert!(pulse(&mut decoder, MIN_SYNC_DURATION_US * 4, &mut now).is_none());
        let unit = MIN_SYNC_DURATION_US * 4 / SYNC_CYCLES;
        for c in digits.chars() {
            let value = c.to_digit(36).unwrap() as u8;
            for bit in (0..4).rev() {
                let duration = if value & (1 << bit) != 0 { 3 * unit } else { unit };
                assert!(pulse(&mut decoder, duration, &mut now).is_none());
            }
        }
        pulse(&mut decoder, MIN_SYNC_DURATION_US * 4, &mut now).unwrap()
    }

    #[test]
    fn test_drain_on_empty_returns_none() {
        let mut ring = CodeRing::new();
        assert!(ring.is_empty());
        assert!(ring.drain_oldest().is_none());
        assert!(ring.is_empty());
    }

    #[test]
    fn test_drains_in_push_order() {
        let mut ring = CodeRing::new();
        ring.push(code_with_digits("000001"));
        ring.push(code_with_digits("000002"));
        ring.push(code_with_digits("000003"));

        assert_eq!(ring.drain_oldest().unwrap().digits(), "000001");
        assert_eq!(ring.drain_oldest().unwrap().digits(), "000002");
        assert_eq!(ring.drain_oldest().unwrap().digits(), "000003");
        assert!(ring.drain_oldest().is_none());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut ring = CodeRing::new();
        for n in 0..=MAX_CODES {
            ring.push(code_with_digits(&format!("{n:06}")));
        }

        // The first push was overwritten; the rest come out in order.
        for n in 1..=MAX_CODES {
            assert_eq!(ring.drain_oldest().unwrap().digits(), format!("{n:06}"));
        }
        assert!(ring.drain_oldest().is_none());
    }

    #[test]
    fn test_drain_one_per_call_interleaved_with_pushes() {
        let mut ring = CodeRing::new();
        ring.push(code_with_digits("00000A"));
        ring.push(code_with_digits("00000B"));
        assert_eq!(ring.drain_oldest().unwrap().digits(), "00000A");
        ring.push(code_with_digits("00000C"));
        assert_eq!(ring.drain_oldest().unwrap().digits(), "00000B");
        assert_eq!(ring.drain_oldest().unwrap().digits(), "00000C");
        assert!(ring.is_empty());
    }
}

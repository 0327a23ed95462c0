//! Edge-timing decode state machine for OOK transmissions.
//!
//! This module implements the self-calibrating decoder at the heart of the
//! crate. It consumes one `(timestamp, duration)` edge event at a time —
//! typically from inside a pin-change interrupt — and reconstructs the
//! transmitted code by classifying each pulse against thresholds derived
//! from the leading sync pulse.
//!
//! The machine has exactly two states. In `AwaitingSync` every pulse is
//! ignored until one long enough to be a sync pulse arrives and calibrates
//! the classification windows. In `Synced`, zero- and one-bits are packed
//! into base-36 digits while duration statistics accumulate, until a
//! trailing sync pulse completes the candidate. The same trailing pulse is
//! then re-evaluated as the leading sync of the next candidate, so
//! back-to-back repeats decode without a gap.
//!
//! Malformed input never raises an error: too-short candidates are
//! discarded, bits beyond capacity are dropped while the session stays
//! live, and unclassifiable durations are skipped outright.

use crate::code::Code;
#[cfg(not(feature = "std"))]
use crate::code::CODE_MAX_LENGTH;
use crate::consts::SYNC_CYCLES;
use crate::encoding::DigitPacker;
use crate::pulse::{PulseClass, PulseThresholds};

#[cfg(not(feature = "std"))]
use heapless::String;
#[cfg(feature = "std")]
use std::string::String;

/// Decode progress of the state machine.
///
/// Restart after a completed or discarded candidate always returns to
/// [`AwaitingSync`](DecoderState::AwaitingSync); there are no other
/// states.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum DecoderState {
    ///   No calibration. Pulses are ignored until one at least
    ///   `SYNC_CYCLES * MIN_PERIOD_US` long acquires sync.
    #[default]
    AwaitingSync,
    ///   Calibrated and accumulating bits for one candidate code.
    Synced,
}

/// Self-calibrating decoder for one OOK edge stream.
///
/// Owns all per-candidate session state: calibrated thresholds, the digit
/// buffer, the partial-digit packer, per-class duration accumulators, and
/// the start timestamp. Storage is reused across candidates; conceptually
/// the machine is always either idle or decoding exactly one transmission.
///
/// [`edge`](Decoder::edge) is the sole entry point and runs in bounded
/// time with no allocation, so it is safe to call from a hard-realtime
/// edge interrupt.
#[derive(Debug)]
pub struct Decoder {
    state: DecoderState,

    /// Classification windows, valid while `state == Synced`.
    thresholds: PulseThresholds,

    /// Digits completed so far for the current candidate.
    #[cfg(not(feature = "std"))]
    digits: String<CODE_MAX_LENGTH>,
    /// Digits completed so far for the current candidate.
    #[cfg(feature = "std")]
    digits: String,

    /// Bits of the unfinished trailing digit.
    packer: DigitPacker,

    /// Timestamp of the edge that began the leading sync pulse.
    start: u32,

    /// Unit period from the leading sync pulse.
    pre_sync_period: u32,
    /// Unit period from the trailing sync pulse, 0 until observed.
    post_sync_period: u32,

    /// Whether the previous restart left a standalone leading sync: set
    /// for the very first candidate, cleared whenever a trailing sync
    /// doubles as the next candidate's leading sync.
    pre_sync_standalone: bool,

    zero_sum: u32,
    zero_count: u32,
    one_sum: u32,
    one_count: u32,
    all_sum: u32,
    all_count: u32,
}

impl Decoder {
    /// Creates an idle decoder in `AwaitingSync`.
    pub const fn new() -> Self {
        Self {
            state: DecoderState::AwaitingSync,
            thresholds: PulseThresholds::uncalibrated(),
            digits: String::new(),
            packer: DigitPacker::new(),
            start: 0,
            pre_sync_period: 0,
            post_sync_period: 0,
            pre_sync_standalone: true,
            zero_sum: 0,
            zero_count: 0,
            one_sum: 0,
            one_count: 0,
            all_sum: 0,
            all_count: 0,
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Consumes one edge event.
    ///
    /// `now` is the timestamp of the edge in microseconds and `duration`
    /// the elapsed time since the previous edge; the caller computes it
    /// with wrapping subtraction so timer wraparound is transparent here.
    ///
    /// Returns a completed [`Code`] when this edge terminated a candidate
    /// that met the minimum length.
    ///
    /// A trailing sync pulse both completes the current candidate and is
    /// re-evaluated as the potential leading sync of the next one, so the
    /// loop below runs at most twice per edge.
    pub fn edge(&mut self, now: u32, duration: u32) -> Option<Code> {
        let mut completed = None;

        for _ in 0..2 {
            match self.state {
                DecoderState::AwaitingSync => {
                    if PulseThresholds::acquires_sync(duration) {
                        self.acquire(now, duration);
                    }
                    break;
                }
                DecoderState::Synced => match self.thresholds.classify(duration) {
                    PulseClass::Sync => {
                        self.post_sync_period = duration / SYNC_CYCLES;
                        completed = self.complete(now);

                        // Restart, reusing the current sync duration. The
                        // next candidate's leading sync is this one's
                        // trailing sync, so it is not standalone.
                        self.state = DecoderState::AwaitingSync;
                        self.pre_sync_standalone = false;
                    }
                    PulseClass::Zero => {
                        if self.digits.len() < Code::MAX_LENGTH {
                            self.push_bit(0);
                            self.zero_sum = self.zero_sum.saturating_add(duration);
                            self.zero_count += 1;
                            self.all_sum = self.all_sum.saturating_add(duration);
                            self.all_count += 1;
                        }
                        break;
                    }
                    PulseClass::One => {
                        if self.digits.len() < Code::MAX_LENGTH {
                            self.push_bit(1);
                            // A one-bit spans three unit periods; store it
                            // at unit scale so the averages are comparable.
                            self.one_sum = self.one_sum.saturating_add(duration / 3);
                            self.one_count += 1;
                            self.all_sum = self.all_sum.saturating_add(duration / 3);
                            self.all_count += 1;
                        }
                        break;
                    }
                    PulseClass::Invalid => break,
                },
            }
        }

        completed
    }

    /// Calibrates from a sync pulse and opens a new candidate.
    fn acquire(&mut self, now: u32, duration: u32) {
        self.thresholds = PulseThresholds::from_sync(duration);

        // The pulse began at the previous edge.
        self.start = now.wrapping_sub(duration);
        self.pre_sync_period = self.thresholds.period;
        self.post_sync_period = 0;

        self.digits.clear();
        self.packer.reset();
        self.zero_sum = 0;
        self.zero_count = 0;
        self.one_sum = 0;
        self.one_count = 0;
        self.all_sum = 0;
        self.all_count = 0;

        self.state = DecoderState::Synced;
    }

    /// Finalizes the current candidate, or discards it when too short.
    ///
    /// Only reachable from the sync-classified arm of [`edge`](Decoder::edge),
    /// so a produced code always carries a trailing sync.
    fn complete(&mut self, now: u32) -> Option<Code> {
        if self.digits.len() < Code::MIN_LENGTH {
            // Code too short
            return None;
        }

        Some(Code {
            digits: self.digits.clone(),
            trailing_bit_count: self.packer.trailing_count(),
            trailing_value: self.packer.trailing_value(),
            duration_us: now.wrapping_sub(self.start),
            pre_sync_standalone: self.pre_sync_standalone,
            post_sync_present: true,
            pre_sync_period_us: self.pre_sync_period,
            post_sync_period_us: self.post_sync_period,
            avg_zero_period_us: average(self.zero_sum, self.zero_count),
            avg_one_period_us: average(self.one_sum, self.one_count),
            avg_all_period_us: average(self.all_sum, self.all_count),
        })
    }

    fn push_bit(&mut self, bit: u8) {
        if let Some(digit) = self.packer.push(bit) {
            // Capacity was checked before the bit was accepted.
            let _ = self.digits.push(digit);
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncating mean, leaving the raw sum (0) when nothing accumulated.
fn average(sum: u32, count: u32) -> u32 {
    if count > 0 { sum / count } else { sum }
}

//! Pulse-duration classification for fixed-ratio OOK transmissions.
//!
//! The protocol encodes data purely in the elapsed time between electrical
//! edges: a zero-bit lasts roughly one unit period, a one-bit roughly
//! three, and each transmission is bracketed by sync pulses of nominally
//! [`SYNC_CYCLES`](crate::consts::SYNC_CYCLES) unit periods. Nothing about
//! edge polarity carries information.
//!
//! Thresholds are not fixed: every sync pulse recalibrates them, so the
//! decoder tracks transmitters with unit periods anywhere above
//! [`MIN_PERIOD_US`](crate::consts::MIN_PERIOD_US) without configuration.
//!
//! All bounds are inclusive. A duration is tested against the sync window
//! first, then zero, then one; the first matching class wins.

use crate::consts::{MIN_SYNC_DURATION_US, SYNC_CYCLES};

/// Classification of a single pulse duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum PulseClass {
    /// Within the sync window derived from the calibrating sync pulse.
    Sync,
    /// Within `0.4×`–`1.6×` the unit period: a zero-bit.
    Zero,
    /// Within `2.3×`–`3.7×` the unit period: a one-bit.
    One,
    /// Outside every window. Discarded without ending the decode.
    Invalid,
}

/// Classification windows calibrated from one observed sync pulse.
///
/// Built once per sync acquisition via [`PulseThresholds::from_sync`] and
/// consulted for every subsequent pulse of that candidate transmission.
#[derive(Debug, Clone, Copy)]
pub struct PulseThresholds {
    /// Calibrated unit period: sync duration over [`SYNC_CYCLES`].
    pub period: u32,
    min_zero: u32,
    max_zero: u32,
    min_one: u32,
    max_one: u32,
    min_sync: u32,
    max_sync: u32,
}

impl PulseThresholds {
    /// Placeholder windows for the uncalibrated state.
    ///
    /// Never consulted: classification only happens after a sync pulse
    /// has replaced these via [`from_sync`](PulseThresholds::from_sync).
    pub const fn uncalibrated() -> Self {
        Self {
            period: 0,
            min_zero: 0,
            max_zero: 0,
            min_one: 0,
            max_one: 0,
            min_sync: 0,
            max_sync: 0,
        }
    }

    /// Returns `true` if `duration` is long enough to acquire sync.
    pub fn acquires_sync(duration: u32) -> bool {
        duration >= MIN_SYNC_DURATION_US
    }

    /// Calibrates classification windows from a sync pulse duration.
    ///
    /// The unit period is `duration / SYNC_CYCLES`, truncating. The sync
    /// window is anchored on the observed duration itself, not the derived
    /// period: `[duration - 6×period, duration + 4×period]`.
    pub fn from_sync(duration: u32) -> Self {
        let period = duration / SYNC_CYCLES;

        // Pathological durations clamp rather than overflow.
        let scaled = |mult: u64| ((period as u64 * mult) / 10).min(u32::MAX as u64) as u32;

        Self {
            period,
            // 1 period = 0-bit
            min_zero: period * 4 / 10,
            max_zero: scaled(16),
            // 3 periods = 1-bit
            min_one: scaled(23),
            max_one: scaled(37),
            min_sync: duration - 6 * period,
            max_sync: duration.saturating_add(4 * period),
        }
    }

    /// Classifies one pulse duration against the calibrated windows.
    pub fn classify(&self, duration: u32) -> PulseClass {
        if duration >= self.min_sync && duration <= self.max_sync {
            PulseClass::Sync
        } else if duration >= self.min_zero && duration <= self.max_zero {
            PulseClass::Zero
        } else if duration >= self.min_one && duration <= self.max_one {
            PulseClass::One
        } else {
            PulseClass::Invalid
        }
    }
}

impl Default for PulseThresholds {
    fn default() -> Self {
        Self::uncalibrated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_PERIOD_US;

    #[test]
    fn test_acquisition_threshold() {
        assert!(!PulseThresholds::acquires_sync(
            SYNC_CYCLES * MIN_PERIOD_US - 1
        ));
        assert!(PulseThresholds::acquires_sync(SYNC_CYCLES * MIN_PERIOD_US));
    }

    #[test]
    fn test_period_is_truncating_division() {
        let thresholds = PulseThresholds::from_sync(SYNC_CYCLES * 320 + 30);
        assert_eq!(thresholds.period, 320);
    }

    #[test]
    fn test_exact_multiples_classify_as_bits() {
        let thresholds = PulseThresholds::from_sync(SYNC_CYCLES * 320);
        assert_eq!(thresholds.classify(320), PulseClass::Zero);
        assert_eq!(thresholds.classify(3 * 320), PulseClass::One);
    }

    #[test]
    fn test_zero_window_bounds_inclusive() {
        let thresholds = PulseThresholds::from_sync(SYNC_CYCLES * 1000);
        assert_eq!(thresholds.classify(399), PulseClass::Invalid);
        assert_eq!(thresholds.classify(400), PulseClass::Zero);
        assert_eq!(thresholds.classify(1600), PulseClass::Zero);
        assert_eq!(thresholds.classify(1601), PulseClass::Invalid);
    }

    #[test]
    fn test_one_window_bounds_inclusive() {
        let thresholds = PulseThresholds::from_sync(SYNC_CYCLES * 1000);
        assert_eq!(thresholds.classify(2299), PulseClass::Invalid);
        assert_eq!(thresholds.classify(2300), PulseClass::One);
        assert_eq!(thresholds.classify(3700), PulseClass::One);
        assert_eq!(thresholds.classify(3701), PulseClass::Invalid);
    }

    #[test]
    fn test_sync_window_anchored_on_duration() {
        let duration = SYNC_CYCLES * 1000;
        let thresholds = PulseThresholds::from_sync(duration);
        assert_eq!(thresholds.classify(duration), PulseClass::Sync);
        assert_eq!(thresholds.classify(duration - 6000), PulseClass::Sync);
        assert_eq!(thresholds.classify(duration - 6001), PulseClass::Invalid);
        assert_eq!(thresholds.classify(duration + 4000), PulseClass::Sync);
        assert_eq!(thresholds.classify(duration + 4001), PulseClass::Invalid);
    }

    #[test]
    fn test_gap_between_windows_is_invalid() {
        let thresholds = PulseThresholds::from_sync(SYNC_CYCLES * 1000);
        // Between the zero and one windows.
        assert_eq!(thresholds.classify(2000), PulseClass::Invalid);
        // Between the one and sync windows.
        assert_eq!(thresholds.classify(10_000), PulseClass::Invalid);
        assert_eq!(thresholds.classify(0), PulseClass::Invalid);
    }

    #[test]
    fn test_shortest_acquirable_sync_still_classifies_itself() {
        // A repeat of the calibrating pulse must land in the sync window
        // even at the minimum acquirable duration.
        let thresholds = PulseThresholds::from_sync(MIN_SYNC_DURATION_US);
        assert_eq!(
            thresholds.classify(MIN_SYNC_DURATION_US),
            PulseClass::Sync
        );
    }
}

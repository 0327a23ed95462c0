//! Constants used across the OOK decode engine.
//!
//! This module defines the protocol-wide timing and sizing constants used
//! for sync acquisition, pulse classification, and code storage.
//!
//! These values follow the fixed-ratio space/mark convention used by cheap
//! 433 MHz remote-control protocols: a zero-bit lasts one unit period, a
//! one-bit lasts three unit periods, and a sync pulse is nominally
//! [`SYNC_CYCLES`] unit periods.
//!
//! ## Key Concepts
//!
//! - **Unit period**: the base duration inferred from an observed sync
//!   pulse, recalibrated at the start of every candidate transmission.
//! - **Sync acquisition**: an idle-to-sync transition must last at least
//!   [`MIN_SYNC_DURATION_US`] before the decoder treats it as a sync pulse.
//! - **Code storage**: completed codes are collected in a fixed ring of
//!   [`MAX_CODES`] slots, overwriting the oldest entry on overflow.

/// Shortest believable unit period, in microseconds.
///
/// Pulses implying a unit period below this are noise: a sync pulse only
/// acquires calibration when its duration is at least
/// `SYNC_CYCLES * MIN_PERIOD_US`.
pub const MIN_PERIOD_US: u32 = 100;

/// Number of unit periods in a nominal sync pulse.
///
/// The calibrated unit period is the observed sync duration divided by
/// this value.
pub const SYNC_CYCLES: u32 = 31;

/// Minimum duration of a pulse that can acquire sync, in microseconds.
pub const MIN_SYNC_DURATION_US: u32 = SYNC_CYCLES * MIN_PERIOD_US;

/// Capacity of the decoded-code ring buffer.
///
/// When the decoder completes more than this many codes before the
/// consumer drains them, the oldest unread code is silently overwritten.
pub const MAX_CODES: usize = 16;

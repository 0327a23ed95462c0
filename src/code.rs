//! Decoded OOK transmission codes.
//!
//! A [`Code`] is the immutable result of one successfully decoded
//! transmission: the base-36 digit sequence plus the timing diagnostics
//! captured while it was accumulated. Codes are only ever constructed by
//! the decode state machine once completion criteria are met; consumers
//! receive them from the ring buffer and can render them with the
//! [`Display`](core::fmt::Display) implementation.
//!
//! The digit string is bounded by [`Code::MIN_LENGTH`] and
//! [`Code::MAX_LENGTH`]. Transmissions need not end on a 4-bit boundary,
//! so up to three valid bits of an unfinished trailing digit are carried
//! separately as a count and a right-aligned partial value.

use core::fmt;

#[cfg(not(feature = "std"))]
use heapless::String;
#[cfg(feature = "std")]
use std::string::String;

/// Maximum number of digits a code can hold.
///
/// Mirrored as [`Code::MAX_LENGTH`]; kept as a free constant so it can
/// size the backing storage.
pub const CODE_MAX_LENGTH: usize = 32;

/// Minimum number of digits a completed code must hold.
///
/// Mirrored as [`Code::MIN_LENGTH`].
pub const CODE_MIN_LENGTH: usize = 6;

/// One decoded remote-control transmission.
///
/// Immutable after construction. The decode engine fills every field at
/// completion time; the accessors expose them read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Base-36 digit sequence, 4 decoded bits per digit.
    #[cfg(not(feature = "std"))]
    pub(crate) digits: String<CODE_MAX_LENGTH>,
    /// Base-36 digit sequence, 4 decoded bits per digit.
    #[cfg(feature = "std")]
    pub(crate) digits: String,

    /// Valid bits (0–3) held in the unfinished trailing digit group.
    pub(crate) trailing_bit_count: u8,
    /// Right-aligned value of the unfinished trailing digit group.
    pub(crate) trailing_value: u8,

    /// Elapsed time from the first sync edge to the last classified edge.
    pub(crate) duration_us: u32,

    /// Whether the leading sync pulse stood alone rather than doubling as
    /// the previous transmission's trailing sync.
    pub(crate) pre_sync_standalone: bool,
    /// Whether a terminating sync pulse was observed.
    pub(crate) post_sync_present: bool,

    /// Unit period calibrated from the leading sync pulse.
    pub(crate) pre_sync_period_us: u32,
    /// Unit period measured from the trailing sync pulse.
    pub(crate) post_sync_period_us: u32,

    /// Mean observed zero-bit duration.
    pub(crate) avg_zero_period_us: u32,
    /// Mean observed one-bit duration, normalized to unit-period scale.
    pub(crate) avg_one_period_us: u32,
    /// Mean observed bit duration across both classes, normalized.
    pub(crate) avg_all_period_us: u32,
}

impl Code {
    /// Minimum number of digits a completed code holds.
    pub const MIN_LENGTH: usize = CODE_MIN_LENGTH;

    /// Maximum number of digits a code holds; bits beyond this are
    /// dropped during decode.
    pub const MAX_LENGTH: usize = CODE_MAX_LENGTH;

    /// The decoded digit sequence.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of valid bits (0–3) in the unfinished trailing digit.
    pub fn trailing_bit_count(&self) -> u8 {
        self.trailing_bit_count
    }

    /// Right-aligned value of the unfinished trailing digit.
    pub fn trailing_value(&self) -> u8 {
        self.trailing_value
    }

    /// Elapsed microseconds from the first sync edge to the last
    /// classified bit edge.
    pub fn duration_us(&self) -> u32 {
        self.duration_us
    }

    /// `true` if the leading sync pulse was not the previous
    /// transmission's trailing sync — a genuinely fresh transmission
    /// rather than a repeat.
    pub fn pre_sync_standalone(&self) -> bool {
        self.pre_sync_standalone
    }

    /// `true` if a terminating sync pulse was observed.
    pub fn post_sync_present(&self) -> bool {
        self.post_sync_present
    }

    /// Unit period, in microseconds, calibrated from the leading sync.
    pub fn pre_sync_period_us(&self) -> u32 {
        self.pre_sync_period_us
    }

    /// Unit period, in microseconds, measured from the trailing sync.
    ///
    /// Zero when no trailing sync was observed.
    pub fn post_sync_period_us(&self) -> u32 {
        self.post_sync_period_us
    }

    /// Mean zero-bit pulse duration, truncating integer average.
    ///
    /// Zero when the code contained no zero-bits.
    pub fn avg_zero_period_us(&self) -> u32 {
        self.avg_zero_period_us
    }

    /// Mean one-bit pulse duration divided by three, so it is directly
    /// comparable with the zero-bit average.
    ///
    /// Zero when the code contained no one-bits.
    pub fn avg_one_period_us(&self) -> u32 {
        self.avg_one_period_us
    }

    /// Mean normalized duration across all accepted bits.
    pub fn avg_all_period_us(&self) -> u32 {
        self.avg_all_period_us
    }
}

impl fmt::Display for Code {
    /// Renders the digit sequence followed by every diagnostic field.
    ///
    /// A nonzero trailing group appears as `+count:value` directly after
    /// the digits; an absent trailing sync renders as `post=none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)?;
        if self.trailing_bit_count > 0 {
            write!(f, "+{}:{}", self.trailing_bit_count, self.trailing_value)?;
        }

        write!(f, " {}us", self.duration_us)?;
        write!(f, " pre={}us", self.pre_sync_period_us)?;
        if self.pre_sync_standalone {
            f.write_str(" standalone")?;
        }
        if self.post_sync_present {
            write!(f, " post={}us", self.post_sync_period_us)?;
        } else {
            f.write_str(" post=none")?;
        }
        write!(
            f,
            " zero={}us one={}us all={}us",
            self.avg_zero_period_us, self.avg_one_period_us, self.avg_all_period_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Code {
        Code {
            digits: {
                let mut digits = String::new();
                #[cfg(not(feature = "std"))]
                digits.push_str("15155B").unwrap();
                #[cfg(feature = "std")]
                digits.push_str("15155B");
                digits
            },
            trailing_bit_count: 2,
            trailing_value: 0b10,
            duration_us: 27_520,
            pre_sync_standalone: true,
            post_sync_present: true,
            pre_sync_period_us: 320,
            post_sync_period_us: 318,
            avg_zero_period_us: 322,
            avg_one_period_us: 315,
            avg_all_period_us: 319,
        }
    }

    #[test]
    fn test_display_includes_every_field() {
        let rendered = format!("{}", sample());
        assert_eq!(
            rendered,
            "15155B+2:2 27520us pre=320us standalone post=318us zero=322us one=315us all=319us"
        );
    }

    #[test]
    fn test_display_omits_empty_trailing_group() {
        let mut code = sample();
        code.trailing_bit_count = 0;
        code.trailing_value = 0;
        code.pre_sync_standalone = false;
        code.post_sync_present = false;
        let rendered = format!("{code}");
        assert_eq!(
            rendered,
            "15155B 27520us pre=320us post=none zero=322us one=315us all=319us"
        );
    }
}

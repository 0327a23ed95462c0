//! OOK receiver front-end: edge dispatch in, decoded codes out.
//!
//! [`Receiver`] ties the crate together. One side is the edge-event entry
//! point [`on_edge`](Receiver::on_edge), called once per electrical
//! transition on the monitored pin — from a pin-change interrupt (see
//! [`crate::edge`] for the singleton glue) or from the polling
//! [`EdgeDetector`](crate::edge::EdgeDetector). The other side is the
//! consumer API that drains completed codes from the internal ring.
//!
//! Edge polarity carries no information in this protocol; only the time
//! between transitions matters, so `on_edge` takes nothing but a
//! microsecond timestamp. The timestamp source may wrap silently —
//! durations are formed with wrapping subtraction.
//!
//! ## Example
//!
//! ```rust
//! use ook433::receiver::Receiver;
//!
//! let mut receiver = Receiver::new();
//!
//! // One call per edge, from your pin-change handler:
//! # let timestamp_us = 0;
//! receiver.on_edge(timestamp_us);
//!
//! // Elsewhere, drain and render:
//! while let Some(code) = receiver.try_take_code() {
//!     println!("{code}");
//! }
//! ```

use core::convert::Infallible;

use crate::code::Code;
use crate::decoder::{Decoder, DecoderState};
use crate::ring::CodeRing;

/// Complete receive pipeline: previous-edge timestamp, decode state
/// machine, and the decoded-code ring buffer.
///
/// All state lives inline, so a `Receiver` can be placed in a `static`
/// (its constructor is `const`) and driven from interrupt context without
/// allocation.
#[derive(Debug, Default)]
pub struct Receiver {
    /// Timestamp of the previous edge, `None` until the first edge has
    /// been seen. There is no pulse before the first edge, so that edge
    /// only primes the timestamp instead of fabricating a duration.
    last: Option<u32>,
    decoder: Decoder,
    ring: CodeRing,
}

impl Receiver {
    /// Creates an idle receiver.
    pub const fn new() -> Self {
        Self {
            last: None,
            decoder: Decoder::new(),
            ring: CodeRing::new(),
        }
    }

    /// Handles one electrical edge at `now_us`.
    ///
    /// Computes the elapsed pulse duration since the previous edge —
    /// correct across timer wraparound — and advances the decoder.
    /// A completed code is pushed into the ring, overwriting the oldest
    /// unread entry if the consumer has fallen [`MAX_CODES`](crate::consts::MAX_CODES)
    /// behind. The very first edge carries no duration and only records
    /// its timestamp.
    ///
    /// Bounded time, no blocking, no allocation: safe to call from a
    /// hard-realtime edge interrupt.
    pub fn on_edge(&mut self, now_us: u32) {
        if let Some(last) = self.last {
            let duration = now_us.wrapping_sub(last);

            if let Some(code) = self.decoder.edge(now_us, duration) {
                #[cfg(feature = "defmt-0-3")]
                defmt::trace!("decoded {} digit code", code.digits().len());
                #[cfg(feature = "log")]
                log::trace!("decoded {} digit code", code.digits().len());

                self.ring.push(code);
            }
        }

        self.last = Some(now_us);
    }

    /// Removes and returns the oldest completed code, if any.
    ///
    /// When edges arrive from interrupt context, do not call this
    /// directly — use the critical-section wrappers in [`crate::edge`] so
    /// the producer is suspended for exactly one slot copy.
    pub fn try_take_code(&mut self) -> Option<Code> {
        self.ring.drain_oldest()
    }

    /// Non-blocking read in the `nb` style.
    ///
    /// Returns [`nb::Error::WouldBlock`] while no code is pending, for use
    /// with `nb::block!` in polling firmware.
    pub fn read_code(&mut self) -> nb::Result<Code, Infallible> {
        self.try_take_code().ok_or(nb::Error::WouldBlock)
    }

    /// `true` while at least one completed code is waiting.
    pub fn has_code(&self) -> bool {
        !self.ring.is_empty()
    }

    /// Decode progress of the underlying state machine.
    pub fn state(&self) -> DecoderState {
        self.decoder.state()
    }
}

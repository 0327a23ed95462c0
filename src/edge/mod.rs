//! Edge dispatch front-ends for the OOK receiver.
//!
//! The decode engine only consumes `(timestamp, duration)` edge events;
//! how those events are produced from a physical pin is up to the host.
//! This module offers two approaches: a pin-change interrupt wired to a
//! shared receiver singleton guarded with `critical_section::with`
//! (`edge-isr` feature), or a busy-polling level sampler for platforms
//! without usable pin-change interrupts (`poll-loop` feature).
//!
//! Contains helpers for ISR- and polling-based dispatch, including:
//! - `global_receiver_init`: const constructor for the shared receiver
//! - `global_receiver_edge`: edge dispatch from the pin-change ISR
//!   (feature `edge-isr`)
//! - `global_try_take_code`: minimal critical-section drain of one code
//!   (feature `edge-isr`)
//! - `init_ook_receiver!` / `ook_receiver_edge!` / `ook_take_code!`:
//!   singleton macro wrappers (feature `edge-isr`)
//! - `EdgeDetector` and `run_poll_loop`: polling front-end driven by an
//!   `embedded_hal` delay provider (feature `poll-loop`)
//!
//! In the interrupt model the ISR is the sole writer of receiver state.
//! The consumer suspends it — via the same critical section — for exactly
//! the time needed to copy one code out of the ring, and renders the code
//! only after the section ends, so decode is never blocked behind a slow
//! serial port.

#[cfg(feature = "poll-loop")]
mod poll;
#[cfg_attr(feature = "poll-loop", allow(unused_imports))]
#[cfg(feature = "poll-loop")]
pub use poll::*;

#[cfg(feature = "edge-isr")]
mod isr;
#[cfg_attr(feature = "edge-isr", allow(unused_imports))]
#[cfg(feature = "edge-isr")]
pub use isr::*;

#[cfg(feature = "edge-isr")]
mod macros;

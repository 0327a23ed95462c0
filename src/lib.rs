//! # ook433
//!
//! A portable, no_std Rust decoder for On-Off Keyed (OOK) 433 MHz
//! remote-control transmissions, as produced by cheap receiver modules
//! like the XY-MK-5V paired with PT2262-style remotes.
//!
//! This crate implements the edge-timing decode engine only:
//! - self-calibrating bit-period thresholds from each sync pulse
//! - pulse classification into zero-bits, one-bits, and sync pulses
//! - base-36 digit packing of the recovered bitstream
//! - a fixed-capacity, overwrite-oldest ring buffer of decoded codes
//! - interrupt-safe shared access with `critical-section`
//!
//! ## Crate features
//! | Feature              | Description |
//! |----------------------|-------------|
//! | `std`                | Disables `#![no_std]` support and replaces `heapless` strings with `std` ones |
//! | `poll-loop`          | Polling [`EdgeDetector`](edge::EdgeDetector) front-end using `embedded_hal` pins and delays |
//! | `edge-isr` (default) | Shared receiver singleton guarded with `critical_section::with` |
//! | `defmt-0-3`          | Uses `defmt` logging |
//! | `log`                | Uses `log` logging |
//!
//! ## Protocol
//!
//! Transmissions are framed by long sync pulses of nominally
//! [`SYNC_CYCLES`](consts::SYNC_CYCLES) unit periods. Between syncs, a
//! pulse of one unit period is a zero-bit and one of three unit periods a
//! one-bit; nothing else is valid. The unit period is not configured but
//! measured from the leading sync of every transmission, so mixed remotes
//! decode without setup. A trailing sync both completes one code and
//! calibrates the next, which is how button-hold repeats arrive back to
//! back.
//!
//! ## Usage
//!
//! ```rust
//! use ook433::receiver::Receiver;
//!
//! let mut receiver = Receiver::new();
//! // from the pin-change interrupt, once per edge:
//! # let now_us = 0;
//! receiver.on_edge(now_us);
//! // from the main loop:
//! if let Some(code) = receiver.try_take_code() {
//!     println!("{code}");
//! }
//! ```
//!
//! Or keep the receiver in a `static` and use the `critical-section`
//! wrappers in [`edge`] from both contexts.
//!
//! ## Integration Notes
//!
//! - Timestamps are a wrapping `u32` microsecond counter; durations are
//!   formed with wrapping subtraction, so rollover is harmless.
//! - Every decode path runs in bounded time without allocation; noise
//!   degrades to "no code produced", never to an error or panic.
//! - Only one consumer should drain a given receiver.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded
//! environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "edge-isr")]
pub use critical_section;

#[cfg(not(feature = "std"))]
pub use heapless;

pub mod code;
pub mod consts;
pub mod decoder;
pub mod edge;
pub mod encoding;
pub mod pulse;
pub mod receiver;
pub mod ring;

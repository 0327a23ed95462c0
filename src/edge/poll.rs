use crate::code::Code;
use crate::receiver::Receiver;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use thiserror::Error;

/// Errors surfaced by the polling edge detector.
///
/// The decode engine itself has no error paths; only sampling the
/// physical pin can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    /// The receiver pin could not be sampled.
    #[error("failed to sample the receiver pin")]
    Pin,
}

/// Level-change detector that turns polled pin samples into edge events.
///
/// For hosts without usable pin-change interrupts: sample the receiver
/// pin at a rate comfortably above twice the shortest expected pulse and
/// every observed level change is dispatched to the [`Receiver`] with its
/// timestamp. Polarity itself carries no information, so only the change
/// matters.
///
/// Timing resolution is the polling interval, so thresholds calibrated
/// from polled edges are coarser than interrupt-captured ones; keep the
/// interval well under `0.4 ×` the unit period of the remotes in use.
#[derive(Debug)]
pub struct EdgeDetector<P: InputPin> {
    pin: P,
    /// Level seen by the previous poll, `None` before the first sample.
    last_level: Option<bool>,
}

impl<P: InputPin> EdgeDetector<P> {
    /// Creates a detector around the receiver output pin.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_level: None,
        }
    }

    /// Samples the pin once at `now_us`, dispatching an edge to
    /// `receiver` when the level changed since the previous sample.
    ///
    /// Returns whether an edge was dispatched.
    ///
    /// # Errors
    /// [`EdgeError::Pin`] when the pin read fails; no edge is recorded
    /// and the previous level is kept, so a transient fault costs at
    /// most one pulse.
    pub fn poll(&mut self, now_us: u32, receiver: &mut Receiver) -> Result<bool, EdgeError> {
        let level = self.pin.is_high().map_err(|_| EdgeError::Pin)?;

        let changed = match self.last_level {
            Some(last) => last != level,
            None => false,
        };
        self.last_level = Some(level);

        if changed {
            receiver.on_edge(now_us);
        }
        Ok(changed)
    }

    /// Releases the pin.
    pub fn free(self) -> P {
        self.pin
    }
}

/// Runs a blocking sample loop that feeds `receiver` and hands every
/// decoded code to `on_code`.
///
/// This is a simple polling front-end for single-purpose firmware where
/// interrupts are unavailable or undesired, in the spirit of a blocking
/// delay-driven tick loop. The time source must be the same wrapping
/// microsecond counter the rest of the crate assumes.
///
/// # Arguments
/// - `detector`: the level-change detector owning the receiver pin.
/// - `receiver`: the receive pipeline to drive.
/// - `delay`: delay provider used between samples, typically from the HAL.
/// - `micros`: monotonically increasing, silently wrapping microsecond
///   counter.
/// - `sample_us`: polling interval in microseconds.
/// - `on_code`: called with each completed code, outside any
///   timing-critical work.
///
/// # Errors
/// Returns [`EdgeError::Pin`] if a sample fails; otherwise never returns.
///
/// # Example
/// ```rust,ignore
/// run_poll_loop(&mut detector, &mut receiver, &mut delay, micros, 50, |code| {
///     writeln!(serial, "{code}").ok();
/// })?;
/// ```
pub fn run_poll_loop<P, D, T, F>(
    detector: &mut EdgeDetector<P>,
    receiver: &mut Receiver,
    delay: &mut D,
    mut micros: T,
    sample_us: u32,
    mut on_code: F,
) -> Result<(), EdgeError>
where
    P: InputPin,
    D: DelayNs,
    T: FnMut() -> u32,
    F: FnMut(Code),
{
    loop {
        let _ = detector.poll(micros(), receiver)?;
        if let Some(code) = receiver.try_take_code() {
            on_code(code);
        }
        delay.delay_us(sample_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MIN_SYNC_DURATION_US, SYNC_CYCLES};
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn alternating_levels(count: usize) -> Vec<PinTransaction> {
        (0..count)
            .map(|n| {
                PinTransaction::get(if n % 2 == 0 {
                    PinState::Low
                } else {
                    PinState::High
                })
            })
            .collect()
    }

    #[test]
    fn test_first_sample_only_records_level() {
        let expectations = [PinTransaction::get(PinState::High)];
        let mut pin = PinMock::new(&expectations);
        let mut receiver = Receiver::new();

        let mut detector = EdgeDetector::new(pin.clone());
        assert_eq!(detector.poll(0, &mut receiver), Ok(false));
        pin.done();
    }

    #[test]
    fn test_unchanged_level_dispatches_nothing() {
        let expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut receiver = Receiver::new();

        let mut detector = EdgeDetector::new(pin.clone());
        assert_eq!(detector.poll(100, &mut receiver), Ok(false));
        assert_eq!(detector.poll(200, &mut receiver), Ok(false));
        assert_eq!(detector.poll(300, &mut receiver), Ok(true));
        pin.done();
    }

    #[test]
    fn test_polled_transitions_decode_a_code() {
        let sync = MIN_SYNC_DURATION_US * 4;
        let unit = sync / SYNC_CYCLES;

        // One poll per transition: a priming sample, the edge opening the
        // leading sync, its end, 24 zero-bit edges, and the trailing sync
        // edge.
        let expectations = alternating_levels(28);
        let mut pin = PinMock::new(&expectations);
        let mut receiver = Receiver::new();
        let mut detector = EdgeDetector::new(pin.clone());

        let mut now = 500;
        assert_eq!(detector.poll(now, &mut receiver), Ok(false));
        now += 10;
        assert_eq!(detector.poll(now, &mut receiver), Ok(true));
        for duration in [sync].into_iter().chain(core::iter::repeat_n(unit, 24)) {
            now += duration;
            assert_eq!(detector.poll(now, &mut receiver), Ok(true));
        }
        now += sync;
        assert_eq!(detector.poll(now, &mut receiver), Ok(true));

        let code = receiver.try_take_code().unwrap();
        assert_eq!(code.digits(), "000000");
        assert_eq!(code.pre_sync_period_us(), unit);
        pin.done();
    }
}

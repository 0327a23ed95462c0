use crate::code::Code;
use crate::receiver::Receiver;
use core::cell::RefCell;
use critical_section::Mutex;

/// Initializes a global static [`Receiver`] for use with
/// `critical_section`.
///
/// # Returns
/// * An idle receiver wrapped for shared interrupt/consumer access
///
/// # Example
/// ```rust
/// use ook433::edge::global_receiver_init;
/// use ook433::receiver::Receiver;
/// use core::cell::RefCell;
/// use critical_section::Mutex;
///
/// static RECEIVER: Mutex<RefCell<Receiver>> = global_receiver_init();
/// ```
pub const fn global_receiver_init() -> Mutex<RefCell<Receiver>> {
    Mutex::new(RefCell::new(Receiver::new()))
}

/// Dispatches one edge event to the shared receiver.
///
/// Call once per electrical transition, typically from the pin-change
/// interrupt handler, with the current microsecond timestamp.
///
/// # Arguments
/// * The global static `Receiver`
/// * The edge timestamp in microseconds (wrapping time source)
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn EXTI0() {
///     global_receiver_edge(&RECEIVER, micros());
/// }
/// ```
pub fn global_receiver_edge(global_receiver: &'static Mutex<RefCell<Receiver>>, now_us: u32) {
    critical_section::with(|cs| {
        global_receiver.borrow(cs).borrow_mut().on_edge(now_us);
    });
}

/// Takes the oldest completed code from the shared receiver, if any.
///
/// Edge dispatch is suspended only for the single slot copy; render the
/// returned code *after* this call so slow output never blocks decode.
///
/// # Arguments
/// * The global static `Receiver`
///
/// # Example
/// ```rust,ignore
/// if let Some(code) = global_try_take_code(&RECEIVER) {
///     writeln!(serial, "{code}").ok();
/// }
/// ```
pub fn global_try_take_code(global_receiver: &'static Mutex<RefCell<Receiver>>) -> Option<Code> {
    critical_section::with(|cs| global_receiver.borrow(cs).borrow_mut().try_take_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MIN_SYNC_DURATION_US, SYNC_CYCLES};

    static RECEIVER: Mutex<RefCell<Receiver>> = global_receiver_init();

    #[test]
    fn test_global_receiver_roundtrip() {
        assert!(global_try_take_code(&RECEIVER).is_none());

        let sync = MIN_SYNC_DURATION_US * 4;
        let unit = sync / SYNC_CYCLES;

        let mut now = 1000;
        global_receiver_edge(&RECEIVER, now);
        for duration in [sync]
            .into_iter()
            .chain(core::iter::repeat_n(unit, 24))
            .chain([sync])
        {
            now = now.wrapping_add(duration);
            global_receiver_edge(&RECEIVER, now);
        }

        let code = global_try_take_code(&RECEIVER).unwrap();
        assert_eq!(code.digits(), "000000");
        assert!(global_try_take_code(&RECEIVER).is_none());
    }
}

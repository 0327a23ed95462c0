/// Declares a static global `OOK_RECEIVER` protected by a
/// `critical_section` mutex.
///
/// This macro creates a `static` singleton `OOK_RECEIVER` suitable for
/// interrupt-based environments, where the pin-change ISR and the main
/// thread both need safe access to the shared receiver state.
///
/// # Example
/// ```rust
/// ook433::init_ook_receiver!();
/// ```
#[macro_export]
macro_rules! init_ook_receiver {
    () => {
        pub static OOK_RECEIVER: $crate::critical_section::Mutex<
            core::cell::RefCell<$crate::receiver::Receiver>,
        > = $crate::critical_section::Mutex::new(core::cell::RefCell::new(
            $crate::receiver::Receiver::new(),
        ));
    };
}

/// Dispatches one edge to the global `OOK_RECEIVER`.
///
/// This macro is intended to be invoked from the pin-change ISR with the
/// current microsecond timestamp, for both rising and falling edges.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn EXTI0() {
///     ook433::ook_receiver_edge!(micros());
/// }
/// ```
///
/// # Notes
/// - Assumes `OOK_RECEIVER` was declared with
///   [`init_ook_receiver!`](crate::init_ook_receiver).
#[macro_export]
macro_rules! ook_receiver_edge {
    ( $now_us:expr ) => {
        $crate::edge::global_receiver_edge(&OOK_RECEIVER, $now_us)
    };
}

/// Takes the oldest completed code from the global `OOK_RECEIVER`.
///
/// Expands to an `Option<Code>`; edge dispatch is suspended only while
/// the single slot is copied out, so print the result after the macro
/// returns rather than inside any shared-state section.
///
/// # Example
/// ```rust,ignore
/// if let Some(code) = ook433::ook_take_code!() {
///     writeln!(serial, "{code}").ok();
/// }
/// ```
#[macro_export]
macro_rules! ook_take_code {
    () => {
        $crate::edge::global_try_take_code(&OOK_RECEIVER)
    };
}

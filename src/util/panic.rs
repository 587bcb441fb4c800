//! Test helpers for operations that are expected to panic.

/// Runs `$run` and asserts that it panics. With a second argument, also asserts that the panic
/// message contains the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            $crate::util::panic::catch_message(|| {
                $run;
            })
            .is_some(),
            "expected the block to panic"
        )
    };
    ($run:block, $expected:expr) => {
        match $crate::util::panic::catch_message(|| {
            $run;
        }) {
            Some(message) => assert!(
                message.contains($expected),
                "panic message {message:?} doesn't contain {:?}",
                $expected
            ),
            None => panic!("expected the block to panic with {:?}", $expected),
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Runs `run`, returning its panic message if it panicked. Payloads that aren't strings produce an
/// empty message.
pub fn catch_message(run: impl FnOnce()) -> Option<String> {
    let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(run)).err()?;
    Some(
        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_default(),
    )
}

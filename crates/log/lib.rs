#[macro_export]
macro_rules! upow_log {
  () => {
    upow_logger::ConsoleSink::__log("\n")
  };
  ($($arg:tt)*) => {{
    upow_logger::ConsoleSink::__log(&format!($($arg)*));
  }};
}

/// Like `debug_assert!`, except completely compiled out in release
/// builds
#[macro_export]
macro_rules! upow_debug_assert {
  ($expr:expr, $($arg:tt)*) => {
    #[cfg(debug_assertions)]
    assert!($expr, $($arg)*)
  };
}

/// Diagnostic sink for the interactive front end. Everything goes to
/// stderr so it never interleaves with prompt output.
pub struct ConsoleSink {}

impl ConsoleSink {
  pub fn __log(log: &str) {
    eprintln!("{log}")
  }
}

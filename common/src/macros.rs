//! Status macros shared by every crate in the workspace.

/// Reports a finished step. Forwards to `tracing` under the `fibo::success`
/// target so the CLI formatter can decorate it apart from ordinary events.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "fibo::success", "{}", format_args!($($arg)*))
    };
}

//! Tracing macros for command dispatch

/// Trace a dispatch phase when `--verbose` is set
///
/// Usage:
/// ```ignore
/// trace_command!(cli, start, "load_config");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;

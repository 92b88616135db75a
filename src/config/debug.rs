//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

/// Emit the minima/maxima found for each analysed series.
pub const PRINT_EXTREMA: bool = false;

/// Emit each step of the support/resistance ladder and the degenerate seed.
pub const PRINT_LEVEL_SYNTHESIS: bool = false;

/// Emit per-instrument timings for batch runs.
pub const PRINT_BATCH_TIMINGS: bool = false;

/// Emit which history source served a request.
pub const PRINT_HISTORY_SOURCE: bool = false;

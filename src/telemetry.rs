//! Tracing setup for hosts embedding the studio.

/// Install the default `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is left in place.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt().try_init().is_ok()
}

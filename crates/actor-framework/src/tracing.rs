//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by the binary.
//!
//! The format is compact and hides the module path (`with_target(false)`); actors
//! identify themselves through the structured `entity_type` field instead:
//!
//! ```text
//! INFO Actor started entity_type="Dish" size=0
//! INFO Created entity_type="Dish" id=4f1c... size=1
//! WARN on_delete failed entity_type="Order" id=9ab0... error=An order cannot be deleted unless it is pending.
//! ```
//!
//! The filter uses `EnvFilter` directive syntax, e.g. `info`, `debug` or
//! `info,grubdash::api=debug`. With `debug`, pipeline steps and full request payloads
//! are logged as well.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber with the given filter directives.
///
/// Falls back to `info` when the directives do not parse. Calling it twice is a no-op.
pub fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .try_init();
}

//! Process-wide version/build tag.
//!
//! Every response payload carries this tag so operators can watch a
//! rolling update converge.

use std::sync::OnceLock;

static TAG: OnceLock<String> = OnceLock::new();

/// Install the version tag for this process. First call wins; later
/// calls are ignored.
pub fn init(tag: impl Into<String>) {
    let _ = TAG.set(tag.into());
}

/// The installed tag, or the crate version when none was installed.
pub fn tag() -> &'static str {
    TAG.get().map_or(env!("CARGO_PKG_VERSION"), String::as_str)
}

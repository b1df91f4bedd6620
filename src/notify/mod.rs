//! Warning Notification Module
//!
//! This module defines the warning-display seam between widgets and the
//! host. Widgets raise advisory warnings through a sink; the host decides
//! how they are shown (banner, log line, test buffer).

mod sink;
pub use sink::{WarningCollector, WarningSink};

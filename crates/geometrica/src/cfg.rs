//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; `TrigCfg` exposes the one knob callers may need to turn.

/// Slack allowed on an asin/acos argument before it counts as out of range.
/// Within the slack the argument is clamped to [-1, 1].
pub(crate) const DOMAIN_EPS: f64 = 1e-12;

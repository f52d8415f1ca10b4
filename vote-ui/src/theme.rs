//! Theme tokens consumed as opaque CSS values.
//!
//! The host page defines the custom properties; nothing here resolves them.

pub const PRIMARY: &str = "var(--color-primary)";
pub const PRIMARY_TINT: &str = "var(--color-primary-tint)";
pub const TEXT: &str = "var(--color-text)";
pub const TEXT_MUTED: &str = "var(--color-text-muted)";
pub const SURFACE: &str = "var(--color-surface)";
pub const BORDER: &str = "var(--color-border)";
pub const GRID: &str = "var(--color-grid)";
pub const RADIUS: &str = "var(--radius-md)";
pub const SHADOW: &str = "var(--shadow-lg)";
pub const SPACE_SM: &str = "var(--space-2)";
pub const SPACE_MD: &str = "var(--space-3)";
pub const DANGER: &str = "var(--color-danger)";
pub const DANGER_TINT: &str = "var(--color-danger-tint)";

//! Darkens character sprites standing in designated shadow regions.
//!
//! Map authors paint "shadow" regions onto tiles; any character occupying
//! one has its sprite's color overlay faded toward a configured darkness,
//! and faded back out after stepping off. The region set comes from startup
//! configuration plus a per-map `SHADOW_REGIONS` note directive.
//!
//! The extension keeps two kinds of state, deliberately separate:
//! - a per-character boolean recomputed on every position event, and
//! - the per-sprite overlay alpha, which chases that boolean a step per
//!   frame so the transition is animated rather than instant.
mod config;
mod extension;
mod regions;
mod sprite;

pub use config::ShadowConfig;
pub use extension::ShadowDarken;
pub use regions::ShadowRegionSet;

//! Time handling: zone resolution, birth-time normalization and the clock.
//!
//! - [`zone`]: user timezone strings to IANA zones or fixed offsets
//! - [`normalize`]: civil birth timestamp to a UTC instant, never failing
//! - [`source`]: the "now" used by commands without an explicit instant

pub mod normalize;
pub mod source;
pub mod zone;

pub use normalize::{NormalizedInstant, ZoneResolution, normalize, to_utc_instant};
pub use zone::{ResolvedZone, TimezoneResolver, resolve_zone_name};

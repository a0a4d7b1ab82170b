//! # astrofacts
//!
//! Astrological facts for a birth profile: the tropical sun sign, the moon
//! sign from the Moon's apparent ecliptic longitude, and the Chinese zodiac
//! animal with its element and polarity.
//!
//! ## Architecture
//!
//! - **Calculator**: `zodiac` holds the four resolvers and the lunar series,
//!   `time` turns local birth data into a UTC instant. Both are pure and total.
//! - **Assembly**: `profile` parses user input, `facts` combines everything
//!   into one serializable record.
//! - **Front end**: `args` and `commands` implement the CLI, `config` loads
//!   `astrofacts.toml`, `logger` provides the box-drawing output.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod facts;
pub mod profile;
pub mod time;
pub mod zodiac;

pub use facts::ZodiacFacts;
pub use profile::BirthProfile;

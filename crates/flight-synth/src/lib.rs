//! Synthetic flight profiles with injected faults
//!
//! [`FlightProfileGenerator`] produces a seeded climb, cruise and descent
//! series, then adds the configured faults. The default parameters give a
//! 61-minute flight with an altitude spike at minute 25 and a speed drop at
//! minute 45.
//!
//! ```rust
//! use flight_core::SeriesSource;
//! use flight_synth::FlightProfileGenerator;
//!
//! let series = FlightProfileGenerator::default().generate().unwrap();
//! assert_eq!(series.len(), 61);
//! ```

pub mod generator;
pub mod params;

pub use generator::FlightProfileGenerator;
pub use params::{FlightProfileParameters, InjectedField, Injection};

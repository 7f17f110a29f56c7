use crate::params::{FlightProfileParameters, InjectedField};
use flight_core::{Error, Result, Sample, Series, SeriesSource};
use flight_features::slope;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, instrument};

/// Synthetic climb, cruise and descent flight
///
/// Noise and heading drift come from a `ChaCha8Rng` seeded with
/// [`FlightProfileParameters::seed`], so a parameter set always produces the
/// same series. Climb rate and fuel burn are derived from the recorded
/// altitude and speed after faults are injected.
#[derive(Debug, Clone, Default)]
pub struct FlightProfileGenerator {
    params: FlightProfileParameters,
}

impl FlightProfileGenerator {
    pub fn new(params: FlightProfileParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &FlightProfileParameters {
        &self.params
    }

    /// Noise-free altitude at minute `t`
    pub fn nominal_altitude(&self, t: u32) -> f64 {
        let p = &self.params;
        let t_f = t as f64;
        if t < p.climb_end_min {
            300.0 * t_f
        } else if t < p.descent_start_min {
            let cruise_start = 300.0 * p.climb_end_min as f64;
            cruise_start + 50.0 * (t - p.climb_end_min) as f64
        } else {
            let top = 300.0 * p.climb_end_min as f64
                + 50.0 * (p.descent_start_min - p.climb_end_min) as f64;
            top - 150.0 * (t - p.descent_start_min) as f64
        }
    }

    /// Noise-free speed at minute `t`
    pub fn nominal_speed(&self, t: u32) -> f64 {
        let p = &self.params;
        let t_f = t as f64;
        if t < p.climb_end_min {
            200.0 + 25.0 * t_f
        } else if t < p.descent_start_min {
            450.0 + (t_f / 3.0).sin() * 10.0
        } else {
            400.0 - 5.0 * (t - p.descent_start_min) as f64
        }
    }

    fn normal(mean: f64, std: f64) -> Result<Normal<f64>> {
        Normal::new(mean, std).map_err(|e| Error::InvalidConfiguration(e.to_string()))
    }
}

impl SeriesSource for FlightProfileGenerator {
    #[instrument(skip(self), fields(seed = self.params.seed, samples = self.params.sample_count()))]
    fn generate(&self) -> Result<Series> {
        let p = &self.params;
        p.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
        let times: Vec<u32> = (0..=p.duration_min).collect();

        let altitude_noise = Self::normal(0.0, p.altitude_noise_std)?;
        let speed_noise = Self::normal(0.0, p.speed_noise_std)?;
        let heading_drift = Self::normal(p.heading_drift_mean, p.heading_drift_std)?;

        let mut altitude: Vec<f64> = times
            .iter()
            .map(|&t| self.nominal_altitude(t) + altitude_noise.sample(&mut rng))
            .collect();
        let mut speed: Vec<f64> = times
            .iter()
            .map(|&t| self.nominal_speed(t) + speed_noise.sample(&mut rng))
            .collect();

        for injection in &p.injections {
            let channel = match injection.field {
                InjectedField::Altitude => &mut altitude,
                InjectedField::Speed => &mut speed,
            };
            channel[injection.index] += injection.delta;
        }
        debug!("Injected {} faults", p.injections.len());

        let climb_rate = slope(&altitude, p.climb_rate_method);

        let fuel_used: Vec<f64> = speed
            .iter()
            .scan(0.0, |total, &v| {
                *total += 0.5 + 0.01 * v;
                Some(*total)
            })
            .collect();

        let mut heading_total = 0.0;
        let samples = times
            .iter()
            .enumerate()
            .map(|(i, &time)| {
                heading_total += heading_drift.sample(&mut rng);
                Sample {
                    time,
                    altitude: altitude[i],
                    speed: speed[i],
                    climb_rate: climb_rate[i],
                    fuel_used: fuel_used[i],
                    heading: heading_total.rem_euclid(360.0),
                }
            })
            .collect();

        Series::new(samples)
    }

    fn source_name(&self) -> &'static str {
        "synthetic flight profile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Injection;
    use approx::assert_relative_eq;
    use flight_features::SlopeMethod;

    #[test]
    fn test_nominal_profile() {
        let g = FlightProfileGenerator::default();
        assert_eq!(g.nominal_altitude(0), 0.0);
        assert_eq!(g.nominal_altitude(9), 2700.0);
        assert_eq!(g.nominal_altitude(10), 3000.0);
        assert_eq!(g.nominal_altitude(39), 4450.0);
        assert_eq!(g.nominal_altitude(40), 4500.0);
        assert_eq!(g.nominal_altitude(60), 1500.0);

        assert_eq!(g.nominal_speed(0), 200.0);
        assert_relative_eq!(g.nominal_speed(12), 450.0 + 4f64.sin() * 10.0);
        assert_eq!(g.nominal_speed(60), 300.0);
    }

    #[test]
    fn test_series_shape_and_invariants() {
        let series = FlightProfileGenerator::default().generate().unwrap();
        assert_eq!(series.len(), 61);
        assert_eq!(series.samples()[0].time, 0);
        assert_eq!(series.samples()[60].time, 60);

        for pair in series.samples().windows(2) {
            assert!(pair[1].fuel_used >= pair[0].fuel_used);
        }
        for s in series.iter() {
            assert!((0.0..360.0).contains(&s.heading));
            assert!(s.altitude.is_finite() && s.speed.is_finite() && s.climb_rate.is_finite());
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = FlightProfileGenerator::default().generate().unwrap();
        let b = FlightProfileGenerator::default().generate().unwrap();
        assert_eq!(a, b);

        let c = FlightProfileGenerator::new(FlightProfileParameters::default().seed(7))
            .generate()
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_injections_land_on_recorded_values() {
        let clean = FlightProfileGenerator::new(FlightProfileParameters::clean())
            .generate()
            .unwrap();
        let faulty = FlightProfileGenerator::default().generate().unwrap();

        let (c, f) = (clean.samples(), faulty.samples());
        assert_relative_eq!(f[25].altitude - c[25].altitude, 1500.0, epsilon = 1e-9);
        assert_relative_eq!(f[45].speed - c[45].speed, -200.0, epsilon = 1e-9);
        assert_relative_eq!(f[24].altitude, c[24].altitude);

        // Backward slope puts the jump on the spiked sample itself
        assert_relative_eq!(f[25].climb_rate - c[25].climb_rate, 1500.0, epsilon = 1e-9);
        assert_relative_eq!(f[26].climb_rate - c[26].climb_rate, -1500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_central_climb_rate() {
        let params = FlightProfileParameters::clean().climb_rate_method(SlopeMethod::Central);
        let series = FlightProfileGenerator::new(params).generate().unwrap();
        let s = series.samples();
        assert_relative_eq!(s[5].climb_rate, (s[6].altitude - s[4].altitude) / 2.0);
    }

    #[test]
    fn test_fuel_burn_formula() {
        let series = FlightProfileGenerator::default().generate().unwrap();
        let s = series.samples();
        assert_relative_eq!(s[0].fuel_used, 0.5 + 0.01 * s[0].speed);
        assert_relative_eq!(
            s[1].fuel_used - s[0].fuel_used,
            0.5 + 0.01 * s[1].speed,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_invalid_parameters_fail_generation() {
        let params = FlightProfileParameters::default().injections(vec![Injection::altitude(100, 1.0)]);
        assert!(matches!(
            FlightProfileGenerator::new(params).generate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}

//! Planet attribute derivation.
//!
//! Expansion continues the owning system's coordinate stream — never
//! reseeded — so the same sector always grows the same planets. The draw
//! order below is part of that contract and must not be rearranged.

use crate::rng::SectorRng;
use glam::Vec3;

const FOLIAGE_COLOR: Vec3 = Vec3::new(0.22, 0.62, 0.28);
const MINERAL_COLOR: Vec3 = Vec3::new(0.55, 0.42, 0.28);
const WATER_COLOR: Vec3 = Vec3::new(0.18, 0.36, 0.78);
const GAS_COLOR: Vec3 = Vec3::new(0.85, 0.85, 0.88);

/// One planet of a star system. Stored in generation order, which is also
/// increasing distance from the star.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Orbital distance from the star, in map units.
    pub distance: f64,
    pub diameter: f64,
    /// Surface temperature; linear falloff with distance.
    pub temperature: f64,
    /// Composition fractions, renormalized to sum to 1.
    pub foliage: f64,
    pub minerals: f64,
    pub water: f64,
    pub gases: f64,
    /// Zero for roughly a fifth of planets.
    pub population: u64,
    pub ring: bool,
    /// Moon diameters, generation order.
    pub moons: Vec<f64>,
}

impl Planet {
    /// Grow the full planet list for one system from its continuing stream.
    ///
    /// Orbital distances are cumulative: the first planet lands in
    /// `[60, 200)` and each later one adds a `[20, 200)` step, so the list
    /// is strictly increasing.
    pub fn generate_all(rng: &mut SectorRng) -> Vec<Planet> {
        let count = rng.rnd_int(0, 10) as usize;
        let mut planets = Vec::with_capacity(count);
        let mut distance = rng.rnd_double(60.0, 200.0);
        for _ in 0..count {
            planets.push(Planet::generate(rng, distance));
            distance += rng.rnd_double(20.0, 200.0);
        }
        planets
    }

    /// Derive one planet at the given orbital distance.
    fn generate(rng: &mut SectorRng, distance: f64) -> Planet {
        let diameter = rng.rnd_double(4.0, 20.0);

        // Temperature drops linearly with distance; foliage peaks on a bell
        // curve around a comfortable 20 degrees; minerals track diameter
        // squared (square-cube law); gases and water derive from the two.
        let temperature = 1000.0 - 3.0 * distance;
        let foliage = (-0.02 * (temperature - 20.0).powi(2)).exp();
        let minerals = diameter * diameter / 400.0;
        let gases = (2.0 * foliage - minerals).abs();
        let water = (gases - minerals).abs() * 3.0;
        let (foliage, minerals, water, gases) =
            normalize_composition(foliage, minerals, water, gases);

        // Negative lower bound clamped to zero: ~20% of planets end up
        // uninhabited.
        let population = rng.rnd_int(-5_000_000, 20_000_000).max(0) as u64;

        let ring = rng.rnd_int(0, 10) == 1;

        // Same zero-inflation trick for the moon count.
        let moon_count = rng.rnd_int(-5, 5).max(0) as usize;
        let mut moons = Vec::with_capacity(moon_count);
        for _ in 0..moon_count {
            moons.push(rng.rnd_double(1.0, 5.0));
        }

        Planet {
            distance,
            diameter,
            temperature,
            foliage,
            minerals,
            water,
            gases,
            population,
            ring,
            moons,
        }
    }

    /// Display color: composition-weighted blend of the reference colors.
    pub fn color(&self) -> Vec3 {
        (FOLIAGE_COLOR * self.foliage as f32
            + MINERAL_COLOR * self.minerals as f32
            + WATER_COLOR * self.water as f32
            + GAS_COLOR * self.gases as f32)
            .min(Vec3::ONE)
    }
}

/// Renormalize the four fractions to sum to 1. A degenerate raw sum (zero
/// or non-finite) falls back to the reference mix instead of dividing.
fn normalize_composition(
    foliage: f64,
    minerals: f64,
    water: f64,
    gases: f64,
) -> (f64, f64, f64, f64) {
    let sum = foliage + minerals + water + gases;
    if sum <= 0.0 || !sum.is_finite() {
        log::warn!("degenerate composition sum {sum}, using reference mix");
        return (0.25, 0.25, 0.25, 0.25);
    }
    (foliage / sum, minerals / sum, water / sum, gases / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_stream_same_planets() {
        let a = Planet::generate_all(&mut SectorRng::from_coords(5, 9));
        let b = Planet::generate_all(&mut SectorRng::from_coords(5, 9));
        assert_eq!(a, b);
    }

    #[test]
    fn distances_strictly_increase() {
        for seed in 0..200 {
            let planets = Planet::generate_all(&mut SectorRng::new(seed));
            for pair in planets.windows(2) {
                assert!(
                    pair[0].distance < pair[1].distance,
                    "seed {seed}: {} !< {}",
                    pair[0].distance,
                    pair[1].distance
                );
            }
        }
    }

    #[test]
    fn composition_fractions_sum_to_one() {
        for seed in 0..200 {
            for planet in Planet::generate_all(&mut SectorRng::new(seed)) {
                let sum = planet.foliage + planet.minerals + planet.water + planet.gases;
                assert!((sum - 1.0).abs() < 1e-9, "seed {seed}: sum {sum}");
                for fraction in [planet.foliage, planet.minerals, planet.water, planet.gases] {
                    assert!((0.0..=1.0).contains(&fraction));
                }
            }
        }
    }

    #[test]
    fn attribute_ranges_hold() {
        for seed in 0..200 {
            let planets = Planet::generate_all(&mut SectorRng::new(seed));
            assert!(planets.len() < 10);
            for planet in planets {
                assert!((4.0..20.0).contains(&planet.diameter));
                assert!(planet.population < 20_000_000);
                assert!(planet.moons.len() < 5);
                for moon in &planet.moons {
                    assert!((1.0..5.0).contains(moon));
                }
            }
        }
    }

    /// Far-out planets underflow foliage to zero but minerals keep the raw
    /// sum positive, so the fallback mix should never appear in practice.
    #[test]
    fn distant_planet_composition_still_normalizes() {
        let mut rng = SectorRng::new(0);
        let planet = Planet::generate(&mut rng, 1800.0);
        let sum = planet.foliage + planet.minerals + planet.water + planet.gases;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_sum_falls_back_to_reference_mix() {
        assert_eq!(
            normalize_composition(0.0, 0.0, 0.0, 0.0),
            (0.25, 0.25, 0.25, 0.25)
        );
        assert_eq!(
            normalize_composition(f64::NAN, 0.1, 0.1, 0.1),
            (0.25, 0.25, 0.25, 0.25)
        );
    }

    #[test]
    fn some_planets_are_uninhabited() {
        let mut saw_zero = false;
        let mut saw_populated = false;
        for seed in 0..500 {
            for planet in Planet::generate_all(&mut SectorRng::new(seed)) {
                if planet.population == 0 {
                    saw_zero = true;
                } else {
                    saw_populated = true;
                }
            }
        }
        assert!(saw_zero && saw_populated);
    }

    #[test]
    fn display_color_channels_in_unit_range() {
        for seed in 0..100 {
            for planet in Planet::generate_all(&mut SectorRng::new(seed)) {
                let color = planet.color();
                for channel in [color.x, color.y, color.z] {
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }
}

//! Star system evaluation and lazy expansion.
//!
//! Construction is cheap: one existence draw and, for the ~5% of sectors
//! holding a star, its visual attributes. Planets are only grown when the
//! system is selected, continuing the same stream.

use crate::name::NameModel;
use crate::planet::Planet;
use crate::rng::SectorRng;
use glam::Vec3;

/// Visual attributes of a star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarAttrs {
    pub diameter: f64,
    /// RGB in `[0, 1)`; channels drawn independently in R, G, B order.
    pub color: Vec3,
}

/// What a sector holds: nothing, a star as seen on the galaxy map, or a
/// star with its planetary system grown in.
#[derive(Debug, Clone, PartialEq)]
pub enum CellState {
    Empty,
    Star(StarAttrs),
    System {
        star: StarAttrs,
        planets: Vec<Planet>,
    },
}

/// One sector's evaluation result. Owns its stream so expansion can
/// continue exactly where construction stopped.
#[derive(Debug, Clone)]
pub struct StarSystem {
    x: i64,
    y: i64,
    rng: SectorRng,
    name: String,
    cell: CellState,
}

impl StarSystem {
    /// Evaluate the sector at `(x, y)`.
    ///
    /// Existence costs exactly one draw. Every sector gets a display name,
    /// star or not, from `names`' own random source — naming is decoupled
    /// from the coordinate stream.
    pub fn new(x: i64, y: i64, gen_full_system: bool, names: &NameModel) -> Self {
        let mut rng = SectorRng::from_coords(x, y);
        let name = names.generate_name();

        let star_exists = rng.rnd_int(0, 20) == 1;
        let cell = if star_exists {
            let diameter = rng.rnd_double(10.0, 40.0);
            let r = rng.rnd_double(0.0, 1.0) as f32;
            let g = rng.rnd_double(0.0, 1.0) as f32;
            let b = rng.rnd_double(0.0, 1.0) as f32;
            CellState::Star(StarAttrs {
                diameter,
                color: Vec3::new(r, g, b),
            })
        } else {
            CellState::Empty
        };

        let mut system = Self { x, y, rng, name, cell };
        if gen_full_system {
            system.generate_system();
        }
        system
    }

    /// Expand to the full planetary system.
    ///
    /// Idempotent: empty sectors and already-expanded systems are left
    /// untouched. The stream has no rewind, so a second call must never
    /// redraw.
    pub fn generate_system(&mut self) {
        if let CellState::Star(star) = &self.cell {
            let star = star.clone();
            let planets = Planet::generate_all(&mut self.rng);
            log::debug!("expanded ({}, {}): {} planets", self.x, self.y, planets.len());
            self.cell = CellState::System { star, planets };
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exists(&self) -> bool {
        !matches!(self.cell, CellState::Empty)
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.cell, CellState::System { .. })
    }

    pub fn star_diameter(&self) -> Option<f64> {
        match &self.cell {
            CellState::Empty => None,
            CellState::Star(star) | CellState::System { star, .. } => Some(star.diameter),
        }
    }

    pub fn star_color(&self) -> Option<Vec3> {
        match &self.cell {
            CellState::Empty => None,
            CellState::Star(star) | CellState::System { star, .. } => Some(star.color),
        }
    }

    /// Planet list in orbital order; empty until expansion.
    pub fn planets(&self) -> &[Planet] {
        match &self.cell {
            CellState::System { planets, .. } => planets,
            _ => &[],
        }
    }

    pub fn cell(&self) -> &CellState {
        &self.cell
    }
}

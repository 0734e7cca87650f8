//! Terminal starfield map: the thin consumer shell over the procgen core.
//!
//! Renders one window of sectors as ASCII, then expands the first starred
//! sector the way the interactive map would on selection.

mod config;

use anyhow::{Context, Result};
use config::StarmapConfig;
use procgen::{NameModel, StarSystem, Universe};

/// Fallback corpus compiled into the binary so a bare checkout still runs.
const DEFAULT_CORPUS: &str = include_str!("../data/planets.txt");

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StarmapConfig::load();
    if !std::path::Path::new("config.ron").exists() {
        config.save();
    }

    let corpus = match std::fs::read_to_string(&config.corpus_path) {
        Ok(text) => text,
        Err(e) => {
            log::info!(
                "no corpus at {:?} ({e}), using the built-in corpus",
                config.corpus_path
            );
            DEFAULT_CORPUS.to_string()
        }
    };
    let names = NameModel::from_corpus(&corpus).context("invalid syllable corpus")?;
    log::info!("name model ready, {} syllables", names.syllable_count());

    let universe = Universe::generate(
        config.universe_width,
        config.universe_height,
        config.sector_size,
        config.origin_x,
        config.origin_y,
        &names,
    )
    .context("universe window rejected")?;

    print_map(&universe);

    match first_star(&universe) {
        Some((col, row)) => {
            // select() snapshots: the grid cell itself stays unexpanded
            let system = universe
                .select(col, row)
                .context("selected sector vanished")?;
            print_system(&system);
        }
        None => println!("no stars in this window, try another origin"),
    }

    Ok(())
}

fn print_map(universe: &Universe) {
    let (ox, oy) = universe.origin();
    println!(
        "── sector window {}x{} at ({}, {}) ──",
        universe.cols(),
        universe.rows(),
        ox,
        oy
    );
    for row in 0..universe.rows() {
        let mut line = String::with_capacity(universe.cols());
        for col in 0..universe.cols() {
            let glyph = universe
                .at(col, row)
                .and_then(|s| s.star_diameter())
                .map(star_glyph)
                .unwrap_or(' ');
            line.push(glyph);
        }
        println!("{line}");
    }
}

/// Bigger stars get heavier glyphs.
fn star_glyph(diameter: f64) -> char {
    match diameter {
        d if d < 18.0 => '.',
        d if d < 26.0 => 'o',
        d if d < 34.0 => 'O',
        _ => '@',
    }
}

fn first_star(universe: &Universe) -> Option<(usize, usize)> {
    universe
        .systems()
        .enumerate()
        .find(|(_, s)| s.exists())
        .map(|(i, _)| (i % universe.cols(), i / universe.cols()))
}

fn print_system(system: &StarSystem) {
    println!();
    println!(
        "{} — sector ({}, {})",
        system.name(),
        system.x(),
        system.y()
    );
    if let (Some(diameter), Some(color)) = (system.star_diameter(), system.star_color()) {
        println!(
            "star: diameter {:.1}, color ({:.2}, {:.2}, {:.2})",
            diameter, color.x, color.y, color.z
        );
    }
    if system.planets().is_empty() {
        println!("no planets");
        return;
    }
    println!(
        "{:>10} {:>9} {:>7} {:>12} {:>5} {:>6}  composition (fol/min/wat/gas)",
        "distance", "diameter", "temp", "population", "ring", "moons"
    );
    for planet in system.planets() {
        println!(
            "{:>10.1} {:>9.1} {:>7.0} {:>12} {:>5} {:>6}  {:.2}/{:.2}/{:.2}/{:.2}",
            planet.distance,
            planet.diameter,
            planet.temperature,
            planet.population,
            if planet.ring { "yes" } else { "no" },
            planet.moons.len(),
            planet.foliage,
            planet.minerals,
            planet.water,
            planet.gases,
        );
    }
}

//! Headless firebreak run with configurable parameters.
//!
//! Builds a random city, ignites it, and lets the fire spread for a fixed
//! number of propagation ticks, printing the board after each one. Useful
//! for eyeballing propagation behavior and for scripted regression runs
//! (pass `--seed` for a reproducible board).

use clap::Parser;
use firebreak_core::{EdgePolicy, GameConfig, GameSession, TileType};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Firebreak propagation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "firebreak-demo")]
#[command(about = "Grid-based fire propagation demo", long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 18)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 9)]
    height: usize,

    /// Propagation ticks to run (stops early once the fire saturates)
    #[arg(short, long, default_value_t = 20)]
    ticks: usize,

    /// RNG seed for a reproducible board (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Clamp firefighter movement at the board edge instead of wrapping
    #[arg(long)]
    clamp_edges: bool,
}

fn main() {
    let args = Args::parse();

    let config = GameConfig {
        width: args.width,
        height: args.height,
        edge_policy: if args.clamp_edges {
            EdgePolicy::Clamp
        } else {
            EdgePolicy::Wrap
        },
        ..GameConfig::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = match GameSession::new(config, &mut rng) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to set up game: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "Created {}x{} city ({} houses, {} grass, {} water), 1 ignition point",
        args.width,
        args.height,
        session.grid().count_of(TileType::House),
        session.grid().count_of(TileType::Grass),
        session.grid().count_of(TileType::Water),
    );
    println!("{}", render_board(&session));

    for tick in 1..=args.ticks {
        let ignited = session.advance_fire();
        println!("tick {tick}: {ignited} newly ignited");
        println!("{}", render_board(&session));
        if ignited == 0 {
            println!("fire saturated after {tick} ticks");
            break;
        }
    }

    println!(
        "final census: {} fire, {} grass, {} house, {} water",
        session.grid().count_of(TileType::Fire),
        session.grid().count_of(TileType::Grass),
        session.grid().count_of(TileType::House),
        session.grid().count_of(TileType::Water),
    );
}

/// ASCII board: `#` fire, `.` grass, `H` house, `~` water, `@` firefighter.
fn render_board(session: &GameSession) -> String {
    let (width, height) = session.grid().dimensions();
    let firefighter_at = session.firefighter().position();
    let mut out = String::with_capacity((width + 1) * height);

    for row in 0..height {
        for col in 0..width {
            let glyph = if (row, col) == firefighter_at {
                '@'
            } else {
                match session.grid().query(row, col).map(|cell| cell.tile) {
                    Some(TileType::Fire) => '#',
                    Some(TileType::Grass) => '.',
                    Some(TileType::House) => 'H',
                    Some(TileType::Water) => '~',
                    None => ' ',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

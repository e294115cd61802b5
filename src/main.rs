use std::path::PathBuf;

use clap::{Parser, Subcommand};
use facelet::preferences::{Preferences, PREFS_PATH};
use facelet::puzzle::invariants::{conserves_colors, is_bijection, validate_turn_tables};
use facelet::puzzle::{random_scramble, CubeState, PieceState};
use facelet::render::{draw_label_net, draw_net, draw_piece_net};
use facelet::session::{Player, Session};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Preferences file, in JSON format.
    #[arg(long, short = 'p', default_value = PREFS_PATH, value_name = "PREFERENCES")]
    preferences: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a scramble to the solved cube and print the result.
    Apply {
        /// The moves to apply, e.g. "R U' F2".
        scramble: String,
        /// Print every intermediate state.
        #[arg(long)]
        steps: bool,
        /// Print piece ids instead of colors.
        #[arg(long)]
        pieces: bool,
        /// Save the result as a session log.
        #[arg(long, value_name = "LOG")]
        save: Option<PathBuf>,
    },
    /// Generate a random scramble.
    Scramble {
        /// Number of moves; defaults to the preferences.
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the scrambled cube.
        #[arg(long)]
        show: bool,
    },
    /// Check the move engine against known properties of the cube group.
    Verify,
    /// Print the fixed position labels.
    Labels,
    /// Write the current preferences (or defaults) to the preferences file.
    InitPreferences,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let prefs = Preferences::load(&cli.preferences)?;

    match cli.command {
        Commands::Apply {
            scramble,
            steps,
            pieces,
            save,
        } => {
            if pieces {
                let player = Player::new(PieceState::solved(), &scramble);
                print_steps(&player, steps, draw_piece_net);
            } else {
                let player = Player::new(CubeState::solved(), &scramble);
                print_steps(&player, steps, |state| draw_net(state, &prefs.colors));
            }
            if let Some(path) = save {
                Session::from_scramble(&scramble).save(&path)?;
                info!("saved session to {}", path.display());
            }
        }
        Commands::Scramble { length, seed, show } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let scramble = random_scramble(&mut rng, length.unwrap_or(prefs.scramble_length));
            println!("{scramble}");
            if show {
                let state = CubeState::solved().apply_algorithm(&scramble);
                println!("\n{}", draw_net(&state, &prefs.colors));
            }
        }
        Commands::Verify => {
            let violations = validate_turn_tables();
            for violation in &violations {
                println!("FAIL {}", violation.0);
            }
            let scrambled = CubeState::solved().apply_algorithm(&random_scramble(
                &mut StdRng::from_entropy(),
                prefs.scramble_length,
            ));
            if !conserves_colors(&scrambled) {
                eyre::bail!("a random scramble does not conserve colors");
            }
            if !is_bijection(&PieceState::solved().apply_scramble("R U F' L2 D B'")) {
                eyre::bail!("piece ids are not a permutation after a scramble");
            }
            if !violations.is_empty() {
                eyre::bail!("{} checks failed", violations.len());
            }
            println!("all checks passed");
        }
        Commands::Labels => {
            println!("{}", draw_label_net());
        }
        Commands::InitPreferences => {
            prefs.save(&cli.preferences)?;
            info!("wrote {}", cli.preferences.display());
        }
    }
    Ok(())
}

fn print_steps<T: Clone>(
    player: &Player<T>,
    steps: bool,
    draw: impl Fn(&facelet::puzzle::FaceletState<T>) -> String,
) {
    if steps {
        for (i, state) in player.states().iter().enumerate() {
            match i.checked_sub(1).map(|j| &player.tokens()[j]) {
                Some(token) => println!("after {token}:"),
                None => println!("start:"),
            }
            println!("{}\n", draw(state));
        }
    } else {
        println!("{}", draw(player.last()));
    }
}

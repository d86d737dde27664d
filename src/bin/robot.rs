use chrono::Local;
use clap::Parser;
use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io::Write;
use xiangqi::display_format::DisplayFormat;
use xiangqi::game::Game;
use xiangqi::piece::Team;

#[derive(Parser)]
#[command(about = "random self-play against the rules engine")]
struct Arguments {
    #[arg(short, long, default_value_t = 1, help = "how many games to play")]
    games: u32,

    #[arg(short, long, help = "starting position as fen, defaults to the opening")]
    fen: Option<String>,

    #[arg(short, long, help = "seed for reproducible games")]
    seed: Option<u64>,

    #[arg(long, default_value_t = 2000, help = "abandon a game after this many plies")]
    limit: u32,

    #[arg(long, help = "print each final position")]
    show: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .init();

    let arguments = Arguments::parse();
    let mut rng = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for index in 0..arguments.games {
        let mut game = match &arguments.fen {
            Some(fen) => {
                let Some(game) = Game::from_fen(fen, Team::Red) else {
                    eprintln!("'{fen}' is not a valid position");
                    std::process::exit(1);
                };
                game
            }
            None => Game::opening(),
        };

        let mut plies = 0;
        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break Some(outcome);
            }
            if plies >= arguments.limit {
                break None;
            }

            let moves = game.legal_moves();
            let &mv = moves.choose(&mut rng).unwrap();
            let played = game.play(mv);
            assert!(played);
            plies += 1;
        };

        match outcome {
            Some(outcome) => info!("game {index}: {outcome} after {plies} plies"),
            None => warn!("game {index}: abandoned after {plies} plies"),
        }

        if arguments.show {
            println!("{}", game.display(DisplayFormat::pretty()));
        }
    }
}

use clap::{Parser, Subcommand};
use log::debug;
use xiangqi::board::Board;
use xiangqi::display_format::DisplayFormat;
use xiangqi::game::Game;
use xiangqi::location::{Location, Move};
use xiangqi::piece::Team;

#[derive(Parser)]
#[command(about = "play xiangqi in the terminal")]
struct Arguments {
    #[arg(long, help = "render pieces as fen letters instead of chinese glyphs")]
    ascii: bool,

    #[arg(long, help = "disable ansi color and highlight effects")]
    plain: bool,

    #[arg(short, long, help = "starting position as fen, defaults to the opening")]
    fen: Option<String>,

    #[arg(long, help = "black moves first")]
    black: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(alias = "p", about = "play a move, such as 'play b2e2'")]
    Play { mv: Move },
    #[command(alias = "m", about = "list legal moves, from one location if given")]
    Moves { from: Option<Location> },
    #[command(about = "print the current position as fen")]
    Fen,
    #[command(about = "redraw the board")]
    Show,
    #[command(about = "abandon the game")]
    Quit,
}

fn main() {
    env_logger::init();

    let arguments = Arguments::parse();
    DisplayFormat::set_defaults(!arguments.ascii, !arguments.plain);

    let turn = if arguments.black { Team::Black } else { Team::Red };
    let mut game = match &arguments.fen {
        Some(fen) => {
            let Some(game) = Game::from_fen(fen, turn) else {
                eprintln!("'{fen}' is not a valid position");
                std::process::exit(1);
            };
            game
        }
        None => Game::new(Board::opening(), turn),
    };

    println!("{}", game.display(DisplayFormat::pretty()));

    while game.outcome().is_none() {
        match read_input() {
            Command::Play { mv } => {
                if game.play(mv) {
                    debug!("played {mv}");
                    println!("{}", game.display(DisplayFormat::pretty()));
                } else {
                    println!("illegal move");
                }
            }
            Command::Moves { from } => {
                let moves = match from {
                    Some(from) => game
                        .legal_destinations(from)
                        .into_iter()
                        .map(|to| Move { from, to })
                        .collect(),
                    None => game.legal_moves(),
                };

                if moves.is_empty() {
                    println!("no legal moves");
                } else {
                    let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
                    println!("{}", moves.join(" "));
                }
            }
            Command::Fen => {
                let (fen, turn) = game.fen();
                println!("{fen} {turn}");
            }
            Command::Show => println!("{}", game.display(DisplayFormat::pretty())),
            Command::Quit => return,
        }
    }
}

fn read_input<T: clap::FromArgMatches + clap::Subcommand>() -> T {
    loop {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).unwrap() == 0 {
            std::process::exit(0);
        }

        let parts = line.split_whitespace();
        if parts.clone().next().is_none() {
            continue;
        }

        #[derive(Parser)]
        #[command(
            name = "",
            no_binary_name = true,
            disable_help_flag = true,
            disable_version_flag = true,
            next_line_help = false,
            help_template = "{usage-heading} {usage}\n{all-args}"
        )]
        struct Input<T: clap::FromArgMatches + clap::Subcommand> {
            #[command(subcommand)]
            command: T,
        }

        match Input::<T>::try_parse_from(parts) {
            Ok(Input { command }) => return command,
            Err(err) => {
                print!("{}", err);
                continue;
            }
        };
    }
}

//! Castaway CLI entry point.

use std::env;
use std::process::ExitCode;

use castaway_runtime::{GameConfig, Invocation, Repl, Session, parse_args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> castaway_foundation::Result<()> {
    let config = match parse_args(args, GameConfig::from_env())? {
        Invocation::Play(config) => config,
        Invocation::Help => {
            print_help();
            return Ok(());
        }
        Invocation::Version => {
            println!("castaway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    init_tracing(&config);

    let session = Session::from_config(&config)?;
    let mut repl = Repl::new(session)?.with_prompt(config.prompt.clone());
    if !config.show_banner {
        repl = repl.without_banner();
    }
    repl.run()
}

/// Installs the log subscriber, writing to stderr.
fn init_tracing(config: &GameConfig) {
    let filter = config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(config.default_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help() {
    println!(
        "\x1b[1mCastaway\x1b[0m - A turn-based text adventure

\x1b[1mUSAGE:\x1b[0m
    castaway [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -w, --world NAME     World to play: ship (default) or town
    --prompt TEXT        Prompt shown before each command
    --no-banner          Skip the banner and opening description
    -v, --verbose        Log at debug level unless a filter is set

\x1b[1mENVIRONMENT:\x1b[0m
    CASTAWAY_WORLD       Same as --world
    CASTAWAY_PROMPT      Same as --prompt
    CASTAWAY_LOG         Tracing filter, e.g. castaway_engine=debug
    RUST_LOG             Tracing filter when CASTAWAY_LOG is unset

\x1b[1mEXAMPLES:\x1b[0m
    castaway                         Wake up on the ship
    castaway -w town                 Start in the town square
    CASTAWAY_LOG=debug castaway      Trace every validated command

\x1b[1mCOMMANDS:\x1b[0m
    ACTION [OBJECT] [PREPOSITION OBJECT]
    HELP                 List every action and its usages
    HELP object          List what you can do with an object that allows HELP
    QUIT, Ctrl+D         Leave the game
    Ctrl+C               Discard the current line"
    );
}

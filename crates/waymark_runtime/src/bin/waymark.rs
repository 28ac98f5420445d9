//! Waymark CLI entry point.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use waymark_runtime::demo::demo_pack;
use waymark_runtime::{FilePersistence, GameEngine, Repl, RuntimeConfig};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    save_dir: Option<PathBuf>,
    seed: Option<u64>,
    intro_ticks: Option<u32>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, Box<dyn std::error::Error>> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--save-dir" => {
                i += 1;
                config.save_dir = Some(PathBuf::from(value(&args, i, "--save-dir")?));
            }
            "--seed" => {
                i += 1;
                let raw = value(&args, i, "--seed")?;
                config.seed = Some(raw.parse().map_err(|_| format!("invalid --seed value: {raw}"))?);
            }
            "--intro-ticks" => {
                i += 1;
                let raw = value(&args, i, "--intro-ticks")?;
                config.intro_ticks = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --intro-ticks value: {raw}"))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn runtime_config(cli: &CliConfig) -> RuntimeConfig {
    let mut config = RuntimeConfig::default().with_env();
    if let Some(dir) = &cli.save_dir {
        config = config.with_save_dir(dir.clone());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ticks) = cli.intro_ticks {
        config = config.with_intro_ticks(ticks);
    }
    config
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("waymark {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = runtime_config(&cli);
    let persistence = FilePersistence::new(config.save_dir.clone());
    let engine = GameEngine::new(demo_pack(), config, Box::new(persistence))?;
    let mut repl = Repl::new(engine)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for script in &cli.scripts {
        let text = fs::read_to_string(script)
            .map_err(|e| format!("failed to read script '{}': {e}", script.display()))?;
        repl.run_script(text.lines(), &mut out)?;
    }

    if cli.batch_mode {
        return Ok(());
    }

    if !cli.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run_with(&mut out)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWaymark\x1b[0m - Text adventure interpreter

\x1b[1mUSAGE:\x1b[0m
    waymark [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Files of commands to play before the prompt

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Play the scripts and exit (no prompt)
    --save-dir DIR       Directory for save files (default: saves)
    --seed N             Seed for the trapdoor
    --intro-ticks N      Commands before the intro ends

\x1b[1mENVIRONMENT:\x1b[0m
    WAYMARK_SAVE_DIR     Save directory when --save-dir is not given
    RUST_LOG             Log filter (default: warn)

\x1b[1mCOMMANDS:\x1b[0m
    n, s, e, w, go <dir>     Move
    take, drop, give <item>  Handle items
    save, load               Save or browse saved games
    quit, restart            End or start over
    Ctrl+D                   Leave"
    );
}

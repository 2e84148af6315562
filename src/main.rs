use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use video_player::{PlayerConfig, Shell, VideoCatalog};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Play videos and manage playlists from a video catalog", long_about = None)]
struct Args {
    /// Path to a catalog file (`Title | id | #tag , #tag` per line)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Seed for PLAY_RANDOM (reproducible picks)
    #[arg(long)]
    seed: Option<u64>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new();
    if let Some(path) = args.catalog {
        config = config.with_catalog(path);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let catalog = config.load_catalog()?;
    log::info!("Catalog loaded: {} videos", catalog.len());

    let mut shell = Shell::new(catalog);
    if let Some(seed) = config.seed {
        log::debug!("Random selection seeded with {}", seed);
        shell = shell.with_seed(seed);
    }

    let (input, interactive): (Box<dyn BufRead>, bool) = match args.script {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open command script: {:?}", path))?;
            (Box::new(BufReader::new(file)), false)
        }
        None => (Box::new(io::stdin().lock()), io::stdin().is_terminal()),
    };

    run(&mut shell, input, interactive)
}

fn run<C: VideoCatalog>(shell: &mut Shell<C>, input: Box<dyn BufRead>, interactive: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if interactive {
        writeln!(stdout, "Welcome! Type HELP for a list of available commands or EXIT to terminate.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match shell.run_line(&line) {
            Some(output) => {
                for out in output {
                    writeln!(stdout, "{}", out)?;
                }
            }
            None => break,
        }
    }

    log::debug!("Session ended");
    Ok(())
}

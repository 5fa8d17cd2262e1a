mod cmd_fragments;
mod cmd_paths;
mod cmd_render;
mod cmd_session;
mod cmd_sessions;
mod cmd_speakers;
mod cmd_tags;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use plens_rhetoric::RhetoricTag;
use plens_store::{Archive, DataPaths};

#[derive(Parser)]
#[command(name = "plens", version, about = "Query the council plenary transcript archive")]
struct Cli {
    /// Data directory (defaults to $PLENS_DATA_DIR, then ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log at debug level (overridden by $PLENS_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List annotated sessions with their stats
    Sessions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one session grouped by agenda item
    Session {
        /// Session id (e.g. 2023-02-01_ABC123)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank council members by number of interventions
    Speakers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank topic tags by number of interventions
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List rhetoric fragments extracted from annotated text
    Fragments {
        /// Only this tag (fr-proposta, fr-ideologia, fr-dada, fr-atac)
        #[arg(long)]
        tag: Option<RhetoricTag>,
        /// Only this speaker (exact name)
        #[arg(long)]
        speaker: Option<String>,
        /// Only this session id
        #[arg(long)]
        session: Option<String>,
        /// Maximum number of fragments to show (0 = unlimited)
        #[arg(long, default_value_t = 50)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render an intervention's annotated text as HTML
    Render {
        /// Intervention id
        id: String,
    },
    /// Show resolved data file paths
    Paths,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PLENS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
    Ok(())
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("PLENS_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// `error: <message>: <cause>...`
fn error_line(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose)?;

    let root = resolve_data_dir(cli.data_dir);
    let paths = DataPaths::resolve(&root)?;
    tracing::debug!(data_dir = %root.display(), "resolved data directory");
    if let Command::Paths = cli.cmd {
        return cmd_paths::execute(&paths);
    }

    let archive = Archive::load(&paths)
        .with_context(|| format!("failed to load archive from {}", root.display()))?;

    match cli.cmd {
        Command::Sessions { json } => cmd_sessions::execute(&archive, json),
        Command::Session { id, json } => cmd_session::execute(&archive, &id, json),
        Command::Speakers { json } => cmd_speakers::execute(&archive, json),
        Command::Tags { json } => cmd_tags::execute(&archive, json),
        Command::Fragments {
            tag,
            speaker,
            session,
            limit,
            json,
        } => cmd_fragments::execute(&cmd_fragments::FragmentParams {
            archive: &archive,
            tag,
            speaker: speaker.as_deref(),
            session: session.as_deref(),
            limit,
            json,
        }),
        Command::Render { id } => cmd_render::execute(&archive, &id),
        Command::Paths => cmd_paths::execute(&paths),
    }
}

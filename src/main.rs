use clap::Parser;
use dom::SnapshotOptions;
use scenario::Scenario;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "propsync")]
#[command(about = "Replay property scenarios against an in-memory element")]
#[command(version)]
struct Args {
    /// Scenario files (`propsync-scenario-v1` TOML)
    #[arg(required = true, value_name = "FILE")]
    scenarios: Vec<PathBuf>,

    /// Print every host call after the snapshot
    #[arg(short, long)]
    journal: bool,

    /// Leave element properties out of the snapshot
    #[arg(long)]
    hide_properties: bool,

    /// Leave attribute namespaces out of the snapshot
    #[arg(long)]
    hide_namespaces: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = SnapshotOptions {
        include_properties: !args.hide_properties,
        include_namespaces: !args.hide_namespaces,
    };
    let mut failed = false;
    for (i, path) in args.scenarios.iter().enumerate() {
        if args.scenarios.len() > 1 {
            if i != 0 {
                println!();
            }
            println!("# {}", path.display());
        }
        if let Err(err) = replay(path, options, args.journal) {
            eprintln!("propsync: {}: {err}", path.display());
            failed = true;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn replay(
    path: &Path,
    options: SnapshotOptions,
    journal: bool,
) -> Result<(), scenario::ScenarioError> {
    let scenario = Scenario::load(path)?;
    let outcome = scenario.run()?;
    log::info!(
        "{}: {} step(s), {} host call(s)",
        path.display(),
        scenario.steps.len(),
        outcome.journal.len()
    );
    println!("{}", outcome.snapshot(options));
    if journal {
        println!("--");
        for line in &outcome.journal {
            println!("{line}");
        }
    }
    Ok(())
}

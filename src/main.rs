use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use isoptera_core::config::AppConfig;
use isoptera_core::{init_logging, EngineSnapshot, Pattern, RunLength, TransitionTable};
use isoptera_lib::app::{run_headless, App, RunSelection, RunSource, RunSummary, Selector};
use isoptera_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Config file path
    #[arg(short, long, default_value = "isoptera.toml")]
    config: PathBuf,

    /// Pattern to run; opens the selector when omitted
    #[arg(short, long)]
    pattern: Option<Pattern>,

    /// JSON transition table to run instead of a catalog pattern
    #[arg(short, long, conflicts_with = "pattern")]
    table: Option<PathBuf>,

    /// Override the pattern's step budget
    #[arg(short, long)]
    steps: Option<u64>,

    /// Run length: short, medium or long
    #[arg(short, long)]
    length: Option<RunLength>,

    /// Export the run as an animated .gif with a .png still
    #[arg(short, long)]
    export: bool,

    /// Write the final state as gzipped JSON
    #[arg(long)]
    save_snapshot: Option<PathBuf>,

    /// List catalog patterns and exit
    #[arg(long)]
    list: bool,

    /// Print the selected transition table and exit
    #[arg(long)]
    print_table: bool,

    /// Print the final grid as text (`#` marked, `X` cursor)
    #[arg(long)]
    print_grid: bool,

    /// Save the selected transition table as JSON and exit
    #[arg(long)]
    write_table: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Interactive,
    Headless,
}

fn selection_from_args(args: &Args, config: &AppConfig) -> Result<Option<RunSelection>> {
    let source = match (&args.table, args.pattern.or(config.run.pattern)) {
        (Some(path), _) => RunSource::from_table_file(path, args.steps)
            .with_context(|| format!("loading table {}", path.display()))?,
        (None, Some(pattern)) => RunSource::from_pattern(pattern).with_iterations(args.steps),
        (None, None) => return Ok(None),
    };
    Ok(Some(RunSelection {
        source,
        length: args.length.unwrap_or(config.run.length),
        export: args.export || config.run.export,
    }))
}

fn finish_run(args: &Args, summary: &RunSummary, snapshot: &EngineSnapshot) -> Result<()> {
    if let Some(path) = &args.save_snapshot {
        isoptera_io::save_snapshot(snapshot, path)?;
    }
    if args.print_grid {
        print!("{snapshot}");
    }
    report(summary);
    Ok(())
}

fn report(summary: &RunSummary) {
    println!(
        "{} steps, {} frames, {} marked cells{}",
        summary.steps,
        summary.frames,
        summary.marked_cells,
        if summary.halted { ", halted" } else { "" }
    );
    if let Some(video) = &summary.video {
        println!("video: {}", video.display());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for pattern in Pattern::ALL {
            println!(
                "{:<18} {:>7} steps  {}",
                pattern.slug(),
                pattern.iterations(),
                pattern.description()
            );
        }
        return Ok(());
    }

    let config = AppConfig::load(&args.config)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received, initiating graceful shutdown...");
        shutdown_clone.store(true, Ordering::SeqCst);
    });

    match args.mode {
        Mode::Headless => {
            init_logging("info");
            let selection =
                selection_from_args(&args, &config)?.unwrap_or_else(|| RunSelection {
                    source: RunSource::from_pattern(Pattern::ExpandingFrame)
                        .with_iterations(args.steps),
                    length: args.length.unwrap_or(config.run.length),
                    export: args.export || config.run.export,
                });
            if args.print_table || args.write_table.is_some() {
                return dump_table(&args, &selection);
            }

            let (summary, snapshot) = run_headless(&config, selection, &shutdown)?;
            finish_run(&args, &summary, &snapshot)?;
        }
        Mode::Interactive => {
            // stderr shares the terminal with the UI
            init_logging("warn");
            let preset = selection_from_args(&args, &config)?;
            if args.print_table || args.write_table.is_some() {
                if let Some(selection) = &preset {
                    return dump_table(&args, selection);
                }
            }

            let mut tui = Tui::new()?;
            tui.init()?;

            let selection = match preset {
                Some(selection) => Some(selection),
                None => Selector::new(config.run.length).run(&mut tui)?,
            };

            let result = match selection {
                Some(selection) => {
                    Some(run_interactive(&mut tui, &config, selection, shutdown).await)
                }
                None => None,
            };

            tui.exit()?;

            match result {
                Some(Ok((summary, snapshot))) => {
                    finish_run(&args, &summary, &snapshot)?;
                }
                Some(Err(e)) => eprintln!("Application error: {e:#}"),
                None => {}
            }
        }
    }

    Ok(())
}

async fn run_interactive(
    tui: &mut Tui,
    config: &AppConfig,
    selection: RunSelection,
    shutdown: Arc<AtomicBool>,
) -> Result<(RunSummary, EngineSnapshot)> {
    let mut app = App::new(config, selection)?;
    app.run(tui, shutdown).await?;
    let snapshot = app.snapshot.clone();
    Ok((app.finish()?, snapshot))
}

fn dump_table(args: &Args, selection: &RunSelection) -> Result<()> {
    let spec = &selection.source.spec;
    if args.print_table {
        let table = TransitionTable::from_spec(spec)?;
        println!("{}", selection.source.name);
        print!("{table}");
    }
    if let Some(path) = &args.write_table {
        isoptera_io::write_table_spec(spec, path)?;
        println!("table: {}", path.display());
    }
    Ok(())
}

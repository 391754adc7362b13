use anyhow::{Context, Result};
use clap::Parser;

use ramo::classifiers::id3::TreePrinter;
use ramo::evaluation::ReportFormat;
use ramo::logging;
use ramo::ui::cli::args::Cli;
use ramo::ui::types::build::build_task;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_MAGENTA: &str = "\x1b[35m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet).context("failed to initialize logging")?;

    let choice = cli.into_task_choice();
    let task = build_task(&choice)?;

    println!("{BOLD}{FG_CYAN}▶ ID3 decision tree{RESET}  {}", timestamp_now());
    println!(
        "{DIM}source={}  rows={}  queries={}{RESET}",
        choice.title(),
        task.dataset().len(),
        task.queries().len()
    );
    println!("{FG_GREY}{}{RESET}", "─".repeat(72));

    let outcome = task.run().context("failed to train and classify")?;

    let printer = TreePrinter::new().with_defaults(choice.output.show_defaults);
    println!(
        "{BOLD}{FG_MAGENTA}==== Decision tree ({}) ===={RESET}",
        task.dataset().header().relation_name()
    );
    print!("{}", outcome.tree.render(printer));
    println!(
        "{DIM}depth={}  decision_nodes={}  leaves={}{RESET}",
        outcome.tree.depth(),
        outcome.tree.decision_node_count(),
        outcome.tree.leaf_count()
    );

    println!();
    println!("{BOLD}{FG_MAGENTA}==== Predictions ===={RESET}");
    print!("{}", outcome.report);
    if let Some(accuracy) = outcome.report.accuracy() {
        println!(
            "{FG_GREEN}accuracy={:.4}{RESET}  {DIM}({}/{} labeled queries, {:.3}ms){RESET}",
            accuracy,
            outcome.report.correct_count(),
            outcome.report.labeled_count(),
            outcome.elapsed.as_secs_f64() * 1e3
        );
    }

    if let Some(path) = &choice.output.dump_file {
        outcome
            .report
            .export(path, ReportFormat::from(choice.output.dump_format))
            .with_context(|| format!("failed to export predictions to {}", path.display()))?;
        println!("{DIM}predictions written to {}{RESET}", path.display());
    }

    Ok(())
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}

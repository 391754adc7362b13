use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::ui::types::choices::{
    DatasetChoice, DumpFormat, OutputOptions, QuerySource, TaskChoice, TrainingSource,
};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Train ID3 decision trees on nominal data and classify queries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train on a built-in dataset and classify the built-in queries
    Demo(DemoArgs),
    /// Train on an ARFF file and classify another one (or the training rows)
    Run(RunArgs),
}

#[derive(Debug, Default, Args)]
pub struct DemoArgs {
    /// Built-in dataset (smartphone, smartphone-extended)
    #[arg(
        long,
        default_value = "smartphone",
        value_name = "DATASET",
        value_parser = parse_kind::<DatasetChoice>,
    )]
    pub dataset: DatasetChoice,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// ARFF file with labeled training rows; the last attribute is the class
    #[arg(long, value_name = "ARFF", value_hint = ValueHint::FilePath)]
    pub train: PathBuf,

    /// ARFF file with queries; `?` in the class column marks a row unlabeled
    #[arg(long, value_name = "ARFF", value_hint = ValueHint::FilePath)]
    pub test: Option<PathBuf>,

    /// Restrict split candidates to this attribute (repeatable)
    #[arg(long = "attribute", value_name = "NAME")]
    pub attributes: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Default, Args)]
pub struct OutputArgs {
    /// Print each split's fallback label
    #[arg(long)]
    pub show_defaults: bool,

    /// File to dump predictions after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,

    /// Format for the dump file (csv, tsv, json)
    #[arg(
        long,
        default_value = "csv",
        value_name = "FORMAT",
        value_parser = parse_kind::<DumpFormat>,
    )]
    pub dump_format: DumpFormat,
}

impl Cli {
    /// The task to execute; no subcommand means the default demo.
    pub fn into_task_choice(self) -> TaskChoice {
        match self.command {
            Some(Command::Demo(args)) => args.into_task_choice(),
            Some(Command::Run(args)) => args.into_task_choice(),
            None => DemoArgs::default().into_task_choice(),
        }
    }
}

impl DemoArgs {
    pub fn into_task_choice(self) -> TaskChoice {
        TaskChoice {
            output: self.output.into_options(),
            ..TaskChoice::demo(self.dataset)
        }
    }
}

impl RunArgs {
    pub fn into_task_choice(self) -> TaskChoice {
        let queries = match self.test {
            Some(path) => QuerySource::Arff(path),
            None => QuerySource::TrainingRows,
        };
        TaskChoice {
            training: TrainingSource::Arff(self.train),
            queries,
            attributes: self.attributes,
            output: self.output.into_options(),
        }
    }
}

impl OutputArgs {
    fn into_options(self) -> OutputOptions {
        OutputOptions {
            show_defaults: self.show_defaults,
            dump_file: self.dump_file.filter(|p| !p.as_os_str().is_empty()),
            dump_format: self.dump_format,
        }
    }
}

/// Parses a choice name written in any of the usual spellings
/// (`SmartphoneExtended`, `smartphone_extended`, `SMARTPHONE-EXTENDED`).
fn parse_kind<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
{
    let candidates = candidate_spellings(raw);
    for cand in candidates {
        if let Ok(parsed) = cand.parse::<T>() {
            return Ok(parsed);
        }
    }
    Err(format!("could not parse value '{raw}'"))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(trimmed.to_lowercase());
    out.push(kebab_from_token(trimmed));
    out.push(trimmed.replace('_', "-").to_lowercase());
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            buf.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch == '_' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ramo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_default_demo() {
        let cli = parse(&[]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.into_task_choice(), TaskChoice::demo(DatasetChoice::Smartphone));
    }

    #[test]
    fn demo_accepts_dataset_spellings() {
        for spelling in ["smartphone-extended", "SmartphoneExtended", "smartphone_extended"] {
            let choice = parse(&["demo", "--dataset", spelling]).into_task_choice();
            assert_eq!(
                choice.training,
                TrainingSource::Builtin(DatasetChoice::SmartphoneExtended)
            );
        }
        assert!(Cli::try_parse_from(["ramo", "demo", "--dataset", "iris"]).is_err());
    }

    #[test]
    fn run_collects_paths_attributes_and_output() {
        let cli = parse(&[
            "-vv",
            "run",
            "--train",
            "train.arff",
            "--test",
            "test.arff",
            "--attribute",
            "Brand",
            "--attribute",
            "RAM",
            "--show-defaults",
            "--dump-file",
            "out.json",
            "--dump-format",
            "JSON",
        ]);
        assert_eq!(cli.verbose, 2);
        let choice = cli.into_task_choice();
        assert_eq!(choice.training, TrainingSource::Arff("train.arff".into()));
        assert_eq!(choice.queries, QuerySource::Arff("test.arff".into()));
        assert_eq!(choice.attributes, vec!["Brand", "RAM"]);
        assert!(choice.output.show_defaults);
        assert_eq!(choice.output.dump_file, Some(PathBuf::from("out.json")));
        assert_eq!(choice.output.dump_format, DumpFormat::Json);
    }

    #[test]
    fn run_without_test_reclassifies_training_rows() {
        let choice = parse(&["run", "--train", "t.arff"]).into_task_choice();
        assert_eq!(choice.queries, QuerySource::TrainingRows);
        assert!(choice.attributes.is_empty());
        assert_eq!(choice.output.dump_file, None);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(parse(&["-q"]).quiet);
        assert!(Cli::try_parse_from(["ramo", "-q", "-v"]).is_err());
    }

    #[test]
    fn kebab_from_token_handles_camel_and_snake_case() {
        assert_eq!(kebab_from_token("SmartphoneExtended"), "smartphone-extended");
        assert_eq!(kebab_from_token("smartphone_extended"), "smartphone-extended");
        assert_eq!(kebab_from_token("csv"), "csv");
        assert!(candidate_spellings("   ").is_empty());
    }
}

//! anaume CLI - fill-in-the-blank question formatter
//!
//! Normalizes questions and answers from the command line, one at a time or
//! as a JSON batch.

use anaume::{format_batch, format_question, FormatResult, Submission};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Fill-in-the-blank exam question formatter
#[derive(Parser)]
#[command(
    name = "anaume",
    version,
    about = "Normalize fill-in-the-blank exam questions",
    long_about = "anaume - fill-in-the-blank exam question formatter.\n\n\
                  Rewrites blanks, register and answer labels into one canonical format.\n\n\
                  Usage:\n  \
                  anaume format -q <question> -a <answer>   Format one question\n  \
                  anaume format < question.txt              Read the question from stdin\n  \
                  anaume batch <submissions.json>           Format a JSON array of submissions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one question and its answer
    Format {
        /// Question text (default: read from stdin)
        #[arg(short, long, conflicts_with = "question_file")]
        question: Option<String>,

        /// Read the question from a file
        #[arg(long)]
        question_file: Option<PathBuf>,

        /// Answer text
        #[arg(short, long, conflicts_with = "answer_file")]
        answer: Option<String>,

        /// Read the answer from a file
        #[arg(long)]
        answer_file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a JSON array of {"question", "answer"} objects
    Batch {
        /// Input JSON file
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("anaume=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("anaume=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Format {
            question,
            question_file,
            answer,
            answer_file,
            json,
            output,
        } => {
            let question = match read_source(question, question_file.as_deref())? {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let answer = read_source(answer, answer_file.as_deref())?.unwrap_or_default();

            let result = format_question(&question, &answer);
            tracing::info!(blank_count = result.blank_count, "formatted");

            write_output(output.as_ref(), &render_result(&result, json)?)?;

            if let Some(path) = output {
                println!(
                    "{} Formatted ({} blanks): {}",
                    "✓".green().bold(),
                    result.blank_count,
                    path.display()
                );
            }
        }

        Commands::Batch {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Reading submissions...");

            let submissions = load_submissions(&input)?;
            pb.set_message(format!("Formatting {} submissions...", submissions.len()));

            let results = format_batch(&submissions);

            let json = if compact {
                serde_json::to_string(&results)?
            } else {
                serde_json::to_string_pretty(&results)?
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if output.is_some() {
                print_batch_summary(&results);
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Inline text wins over a file; `None` when neither was given.
fn read_source(text: Option<String>, file: Option<&Path>) -> io::Result<Option<String>> {
    match (text, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => fs::read_to_string(path).map(Some),
        (None, None) => Ok(None),
    }
}

fn load_submissions(path: &Path) -> anaume::Result<Vec<Submission>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn render_result(result: &FormatResult, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(result)
    } else {
        Ok(format!("{}\n\n{}", result.question, result.answer))
    }
}

fn print_batch_summary(results: &[FormatResult]) {
    let with_blanks = results.iter().filter(|r| r.has_blanks()).count();
    let total_blanks: usize = results.iter().map(|r| r.blank_count).sum();

    println!("{}", "Batch Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Submissions".bold(), results.len());
    println!("{}: {}", "With blanks".bold(), with_blanks);
    println!("{}: {}", "Blanks".bold(), total_blanks);
}

fn print_version() {
    println!("{} {}", "anaume".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Fill-in-the-blank exam question formatter");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_args() {
        let cli = Cli::parse_from(["anaume", "format", "-q", "これは（　）である。", "-a", "核"]);
        match cli.command {
            Some(Commands::Format {
                question, answer, json, ..
            }) => {
                assert_eq!(question.as_deref(), Some("これは（　）である。"));
                assert_eq!(answer.as_deref(), Some("核"));
                assert!(!json);
            }
            _ => panic!("Expected format command"),
        }
    }

    #[test]
    fn test_question_sources_conflict() {
        let result = Cli::try_parse_from([
            "anaume",
            "format",
            "-q",
            "問題",
            "--question-file",
            "q.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_source_prefers_inline_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ファイルの問題").unwrap();

        let inline = read_source(Some("直接".into()), Some(file.path())).unwrap();
        assert_eq!(inline.as_deref(), Some("直接"));

        let from_file = read_source(None, Some(file.path())).unwrap();
        assert_eq!(from_file.as_deref(), Some("ファイルの問題"));

        assert!(read_source(None, None).unwrap().is_none());
    }

    #[test]
    fn test_load_submissions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"question": "これは（　）である。", "answer": "核"}}, {{"question": "文"}}]"#
        )
        .unwrap();

        let submissions = load_submissions(file.path()).unwrap();
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[1].answer, "");
    }

    #[test]
    fn test_load_submissions_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_submissions(file.path()),
            Err(anaume::Error::Json(_))
        ));
    }

    #[test]
    fn test_load_submissions_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_submissions(&dir.path().join("missing.json")),
            Err(anaume::Error::Io(_))
        ));
    }

    #[test]
    fn test_render_result_text_and_json() {
        let result = format_question("これは（　）である。", "核");

        let text = render_result(&result, false).unwrap();
        assert!(text.ends_with("\n\n正解：核"));

        let json = render_result(&result, true).unwrap();
        let parsed: FormatResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}

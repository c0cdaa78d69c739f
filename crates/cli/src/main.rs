mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jisho_core::{
    Endpoints, ExampleSearchResult, Jisho, JishoConfig, JsonConfig, KanjiRecord, PhraseScrapeResult, RawApiResult,
    TextConfig, convert_to_json, convert_to_text, fetch_file, fetch_stdin, parse_example_page, parse_kanji_page,
    parse_phrase_scrape_page, parse_search_response,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::echo::{format_size, print_banner, print_info, print_step, print_success, print_timing, print_warning};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

/// Look up kanji, example sentences and words on jisho.org
#[derive(Parser, Debug)]
#[command(name = "jisho")]
#[command(author = "Jisho Contributors")]
#[command(version)]
#[command(about = "Look up kanji, example sentences and words on jisho.org", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Parse a saved page (or API response) instead of fetching, "-" for stdin
    #[arg(short, long, global = true, value_name = "FILE")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short, long, global = true, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// List furigana pieces under each sentence (text only)
    #[arg(long, global = true)]
    pieces: bool,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the word API
    Search {
        term: String,

        /// Results page
        #[arg(short, long, value_name = "N")]
        page: Option<u32>,
    },
    /// Kanji details: readings, compounds, radical, stroke order
    Kanji { kanji: String },
    /// Example sentences with furigana
    Examples { phrase: String },
    /// Word page: meanings, other forms, notes, audio
    Phrase { term: String },
}

impl Command {
    fn term(&self) -> &str {
        match self {
            Self::Search { term, .. } | Self::Phrase { term } => term,
            Self::Kanji { kanji } => kanji,
            Self::Examples { phrase } => phrase,
        }
    }

    fn uri(&self, endpoints: &Endpoints) -> String {
        match self {
            Self::Search { term, page } => endpoints.phrase_search(term, *page),
            Self::Kanji { kanji } => endpoints.kanji_search(kanji),
            Self::Examples { phrase } => endpoints.example_search(phrase),
            Self::Phrase { term } => endpoints.phrase_scrape(term),
        }
    }
}

/// One lookup result, whatever the query kind
enum Lookup {
    Search(RawApiResult),
    Kanji(KanjiRecord),
    Examples(ExampleSearchResult),
    Phrase(PhraseScrapeResult),
}

impl Lookup {
    fn found(&self) -> bool {
        match self {
            Self::Search(result) => !result.data.is_empty(),
            Self::Kanji(record) => record.found,
            Self::Examples(result) => result.found,
            Self::Phrase(result) => result.found,
        }
    }

    fn to_json(&self, config: &JsonConfig) -> jisho_core::Result<String> {
        match self {
            Self::Search(result) => convert_to_json(result, config),
            Self::Kanji(record) => convert_to_json(record, config),
            Self::Examples(result) => convert_to_json(result, config),
            Self::Phrase(result) => convert_to_json(result, config),
        }
    }

    fn to_text(&self, config: &TextConfig) -> String {
        match self {
            Self::Search(result) => convert_to_text(result, config),
            Self::Kanji(record) => convert_to_text(record, config),
            Self::Examples(result) => convert_to_text(result, config),
            Self::Phrase(result) => convert_to_text(result, config),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jisho=debug,jisho_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: &str) -> anyhow::Result<String> {
    tracing::debug!(input, "reading saved page");
    if input == "-" {
        fetch_stdin().context("Failed to read from stdin")
    } else {
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Runs the extractor for `command` over an already loaded page.
fn parse_saved(command: &Command, content: &str, endpoints: &Endpoints) -> anyhow::Result<Lookup> {
    tracing::debug!(term = command.term(), bytes = content.len(), "parsing saved page");
    let lookup = match command {
        Command::Search { .. } => {
            Lookup::Search(parse_search_response(content).context("Failed to decode search response")?)
        }
        Command::Kanji { kanji } => Lookup::Kanji(parse_kanji_page(content, kanji, endpoints)),
        Command::Examples { phrase } => Lookup::Examples(
            parse_example_page(content, phrase, endpoints).context("Failed to parse example sentence page")?,
        ),
        Command::Phrase { term } => Lookup::Phrase(
            parse_phrase_scrape_page(content, term, endpoints).context("Failed to parse word page")?,
        ),
    };
    Ok(lookup)
}

async fn fetch_lookup(command: &Command, jisho: &Jisho) -> anyhow::Result<Lookup> {
    tracing::debug!(term = command.term(), timeout = jisho.config().fetch.timeout, "fetching lookup");
    let lookup = match command {
        Command::Search { term, page } => {
            Lookup::Search(jisho.search_for_phrase(term, *page).await.context("Failed to search for phrase")?)
        }
        Command::Kanji { kanji } => {
            Lookup::Kanji(jisho.search_for_kanji(kanji).await.context("Failed to look up kanji")?)
        }
        Command::Examples { phrase } => Lookup::Examples(
            jisho.search_for_examples(phrase).await.context("Failed to search for examples")?,
        ),
        Command::Phrase { term } => {
            Lookup::Phrase(jisho.scrape_for_phrase(term).await.context("Failed to scrape word page")?)
        }
    };
    Ok(lookup)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let mut builder = JishoConfig::builder().timeout(args.timeout);
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    let jisho = Jisho::with_config(builder.build());

    let started = Instant::now();

    let lookup = match &args.input {
        Some(input) => {
            if args.verbose {
                let source = if input == "-" { "stdin".to_string() } else { input.clone() };
                print_step(1, 2, &format!("Reading {}", source.bright_white()));
            }
            let content = read_input(input)?;
            if args.verbose {
                eprintln!("  {} {}", "Size:".dimmed(), format_size(content.len()).bright_white());
            }
            parse_saved(&args.command, &content, &jisho.config().endpoints)?
        }
        None => {
            if args.verbose {
                let uri = args.command.uri(&jisho.config().endpoints);
                print_step(1, 2, &format!("Fetching {}", uri.bright_white().underline()));
            }
            fetch_lookup(&args.command, &jisho).await?
        }
    };

    if args.verbose {
        print_timing("Lookup", started.elapsed());
        eprintln!();
    }

    if !lookup.found() {
        print_warning(&format!("No results for {}", args.command.term()));
    }

    let output = match args.format {
        OutputFormat::Json => lookup
            .to_json(&JsonConfig { pretty: !args.compact })
            .context("Failed to convert to JSON")?,
        OutputFormat::Text => lookup.to_text(&TextConfig { show_pieces: args.pieces }),
    };

    if args.verbose {
        print_step(2, 2, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["jisho", "search", "車", "--page", "2", "-f", "text"]).unwrap();

        assert_eq!(args.format, OutputFormat::Text);
        match args.command {
            Command::Search { term, page } => {
                assert_eq!(term, "車");
                assert_eq!(page, Some(2));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_completions_offer_every_long_flag() {
        let bash = fs::read_to_string(concat!(env!("OUT_DIR"), "/completions/jisho.bash")).unwrap();
        let command = Args::command();

        for arg in command.get_arguments() {
            if let Some(long) = arg.get_long() {
                assert!(bash.contains(&format!("--{}", long)), "completions lack --{}", long);
            }
        }
        assert!(!bash.contains("--user_agent"));
    }

    #[test]
    fn test_user_agent_flag_spelling() {
        let args = Args::try_parse_from(["jisho", "kanji", "車", "--user-agent", "tests/1.0"]).unwrap();
        assert_eq!(args.user_agent.as_deref(), Some("tests/1.0"));
        assert!(Args::try_parse_from(["jisho", "kanji", "車", "--user_agent", "x"]).is_err());
    }

    #[test]
    fn test_command_uri() {
        let endpoints = Endpoints::default();
        let command = Command::Kanji { kanji: "車".to_string() };

        assert_eq!(command.term(), "車");
        assert_eq!(command.uri(&endpoints), "https://jisho.org/search/%E8%BB%8A%23kanji");
    }
}

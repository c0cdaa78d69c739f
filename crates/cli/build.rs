use std::{env, fs, path::PathBuf};

fn global(arg: clap::Arg) -> clap::Arg {
    arg.global(true)
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("jisho")
        .version("1.0.0")
        .author("Jisho Contributors")
        .about("Look up kanji, example sentences and words on jisho.org")
        .subcommand_required(true)
        .arg(global(
            clap::arg!(-i --input <FILE> "Parse a saved page (or API response) instead of fetching, '-' for stdin")
                .value_name("FILE"),
        ))
        .arg(global(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        ))
        .arg(global(
            clap::arg!(-f --format <FORMAT> "Output format (json, text)")
                .value_name("FORMAT")
                .default_value("json")
                .value_parser(["json", "text"]),
        ))
        .arg(global(clap::arg!(--compact "Print JSON on a single line")))
        .arg(global(clap::arg!(--pieces "List furigana pieces under each sentence (text only)")))
        .arg(global(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10")))
        .arg(global(
            clap::Arg::new("user_agent")
                .long("user-agent")
                .value_name("UA")
                .help("Custom User-Agent for HTTP requests"),
        ))
        .arg(global(clap::arg!(-v --verbose "Enable debug logging")))
        .subcommand(
            clap::Command::new("search")
                .about("Search the word API")
                .arg(clap::arg!(<TERM> "Word or phrase to search for"))
                .arg(clap::arg!(-p --page <N> "Results page")),
        )
        .subcommand(
            clap::Command::new("kanji")
                .about("Kanji details: readings, compounds, radical, stroke order")
                .arg(clap::arg!(<KANJI> "Kanji to look up")),
        )
        .subcommand(
            clap::Command::new("examples")
                .about("Example sentences with furigana")
                .arg(clap::arg!(<PHRASE> "Phrase to find sentences for")),
        )
        .subcommand(
            clap::Command::new("phrase")
                .about("Word page: meanings, other forms, notes, audio")
                .arg(clap::arg!(<TERM> "Word to scrape")),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "jisho", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "jisho", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "jisho", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "jisho", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use iconify_search::constants::{DEFAULT_API_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_ICON_SIZE};
use iconify_search::interactive::domain::grouping::group_icons;
use iconify_search::{
    FetchMode, IconId, IconSearch, IconifyClient, SearchConfig, SearchParams, format_search_result,
    format_selection, format_snapshot, logging,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(
    name = "iconify-search",
    version,
    about = "Search and pick icons from the Iconify API",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the Iconify API
    #[arg(long, env = "ICONIFY_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results grouped by collection
    Search {
        query: String,

        /// Maximum number of icons to return
        #[arg(short = 'n', long)]
        limit: Option<u32>,

        /// Offset of the first icon
        #[arg(long)]
        start: Option<u32>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the SVG URL of an icon
    Url {
        /// Icon id, `prefix:name`
        id: String,

        #[arg(long, default_value_t = DEFAULT_ICON_SIZE)]
        size: u32,
    },

    /// Download the SVG markup of an icon
    Svg {
        id: String,

        #[arg(long, default_value_t = DEFAULT_ICON_SIZE)]
        size: u32,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pick icons interactively from stdin
    ///
    /// Every plain line replaces the query. `:select ID` toggles an icon,
    /// `:clear` empties the selection, `:more` loads the next page,
    /// `:retry` refetches and `:done` ends the session. The selection is
    /// printed to stdout, one id per line.
    Pick {
        /// Allow selecting more than one icon
        #[arg(long)]
        multiple: bool,

        /// Fetch a small first page and load more on demand
        #[arg(long)]
        paginated: bool,

        #[arg(long, env = "ICONIFY_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
        debounce_ms: u64,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let use_color = !cli.no_color;
    let client = IconifyClient::with_base_url(&cli.api_url);

    match cli.command {
        Commands::Search {
            query,
            limit,
            start,
            format,
        } => {
            let params = SearchParams { limit, start };
            let result = client
                .search(&query, params)
                .await
                .with_context(|| format!("search for {query:?} failed"))?;

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            match format {
                OutputFormat::Text => {
                    writeln!(&mut handle, "{}", format_search_result(&result, use_color))?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut handle, &result)?;
                    writeln!(&mut handle)?;
                }
                OutputFormat::JsonL => {
                    for group in group_icons(Some(&result), &[]) {
                        serde_json::to_writer(&mut handle, &group)?;
                        writeln!(&mut handle)?;
                    }
                }
            }
        }
        Commands::Url { id, size } => {
            println!("{}", client.icon_url(&id, size)?);
        }
        Commands::Svg { id, size, output } => {
            let svg = client
                .icon_svg(&id, size)
                .await
                .with_context(|| format!("failed to download {id}"))?;
            match output {
                Some(path) => {
                    write_svg(&path, &svg)?;
                    if cli.verbose {
                        eprintln!("Saved {} to {}", id, path.display());
                    }
                }
                None => println!("{svg}"),
            }
        }
        Commands::Pick {
            multiple,
            paginated,
            debounce_ms,
        } => {
            let mode = if paginated {
                FetchMode::Paginated
            } else {
                FetchMode::All
            };
            let config = SearchConfig::default()
                .multiple(multiple)
                .mode(mode)
                .debounce_ms(debounce_ms);
            run_picker(IconSearch::new(client, config), use_color).await?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "iconify-search", &mut io::stdout());
        }
    }

    Ok(())
}

/// One line of picker input.
#[derive(Debug, PartialEq, Eq)]
enum PickInput {
    Query(String),
    Select(String),
    Clear,
    More,
    Retry,
    Done,
    Unknown(String),
}

fn parse_pick_input(line: &str) -> PickInput {
    let Some(command) = line.trim().strip_prefix(':') else {
        return PickInput::Query(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "select" | "s" => PickInput::Select(arg.to_string()),
        "clear" => PickInput::Clear,
        "more" => PickInput::More,
        "retry" => PickInput::Retry,
        "done" | "q" => PickInput::Done,
        _ => PickInput::Unknown(name.to_string()),
    }
}

async fn run_picker(search: IconSearch, use_color: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match parse_pick_input(&line) {
            PickInput::Query(query) => search.set_query(query),
            PickInput::Select(raw) => match IconId::parse(raw) {
                Ok(id) => search.select_icon(id),
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            },
            PickInput::Clear => search.clear_selection(),
            PickInput::More => search.load_more(),
            PickInput::Retry => search.refetch(),
            PickInput::Done => break,
            PickInput::Unknown(name) => {
                eprintln!("Unknown command :{name}");
                continue;
            }
        }

        let snapshot = search.settled().await;
        eprintln!("{}", format_snapshot(&snapshot, use_color));
    }

    let selection = search.snapshot().selection;
    search.shutdown().await;

    if !selection.is_empty() {
        println!("{}", format_selection(&selection));
    }
    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))
}

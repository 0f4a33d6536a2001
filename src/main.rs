//! folio: parse, render and browse sectioned editorial content.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use folio::{app_state, blocks, config, input, render, ui, Section};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Lines moved per page in the detail view.
const PAGE: u16 = 10;

#[derive(Parser)]
#[command(name = "folio", version)]
#[command(about = "Parse, render and browse sectioned editorial content", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./folio.toml when present)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sections of a document as JSON
    Parse {
        /// Content file, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print each section's display blocks as JSON
    Blocks {
        /// Content file, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// Render a document as an HTML fragment
    Render {
        /// Content file, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Link videos instead of embedding players
        #[arg(long)]
        no_embed: bool,
    },
    /// Browse documents in the terminal
    Browse {
        /// Files or directories to browse
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// File extensions to match
        #[arg(long, short = 'e', value_name = "EXT")]
        ext: Vec<String>,
    },
}

#[derive(Serialize)]
struct SectionBlocks<'a> {
    identifier: &'a str,
    title: &'a str,
    blocks: Vec<blocks::Block>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Uses `RUST_LOG` if set, otherwise a level derived from the verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries the JSON/HTML payload.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: Args) -> folio::Result<()> {
    let mut cfg = match args.config {
        Some(path) => config::Config::load_from(&path)?,
        None => config::Config::load(),
    };

    match args.command {
        Command::Parse { path, compact } => {
            let sections = parse_source(path.as_deref())?;
            print_json(&sections, cfg.pretty_json && !compact)
        }
        Command::Blocks { path } => {
            let sections = parse_source(path.as_deref())?;
            let output: Vec<SectionBlocks> = sections
                .iter()
                .map(|section| SectionBlocks {
                    identifier: &section.identifier,
                    title: &section.title,
                    blocks: blocks::split_blocks(&section.body),
                })
                .collect();
            print_json(&output, cfg.pretty_json)
        }
        Command::Render { path, no_embed } => {
            let sections = parse_source(path.as_deref())?;
            let options = render::RenderOptions {
                embed_videos: cfg.embed_videos && !no_embed,
            };
            print!("{}", render::render_document(&sections, &options));
            Ok(())
        }
        Command::Browse { paths, ext } => {
            // Override config with command line args
            if !ext.is_empty() {
                cfg.file_extensions = ext;
            }
            browse(paths, &cfg)
        }
    }
}

fn parse_source(path: Option<&Path>) -> folio::Result<Vec<Section>> {
    let text = input::read_source(path)?;
    Ok(folio::parse_sections(&text))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> folio::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn browse(paths: Vec<PathBuf>, cfg: &config::Config) -> folio::Result<()> {
    let documents = input::find_documents(paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let sections = if documents.len() == 1 {
        let sections = input::load_sections(&documents[0])?;
        if sections.is_empty() {
            eprintln!("No sections found in documents");
            return Ok(());
        }
        sections
    } else {
        Vec::new()
    };

    let state = app_state::AppState::new(documents, sections, cfg.wrap_width);
    run_tui(state)?;
    Ok(())
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            app_state::View::FileList => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.prev_file(),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Enter => app.open_current_file(),
                _ => {}
            },
            app_state::View::List => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    if app.back() {
                        return Ok(());
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => app.prev_section(),
                KeyCode::Down | KeyCode::Char('j') => app.next_section(),
                KeyCode::Home => {
                    if let Some(first) = app.navigate_to_first() {
                        app.current_section_index = first;
                    }
                }
                KeyCode::End => {
                    if let Some(last) = app.navigate_to_last() {
                        app.current_section_index = last;
                    }
                }
                KeyCode::Enter => app.enter_detail_view(),
                _ => {}
            },
            app_state::View::Detail => match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Backspace => {
                    app.back();
                }
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::PageUp => app.scroll_up(PAGE),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
                KeyCode::Left | KeyCode::Char('h') => {
                    app.prev_section();
                    app.enter_detail_view();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    app.next_section();
                    app.enter_detail_view();
                }
                _ => {}
            },
        }
    }
}

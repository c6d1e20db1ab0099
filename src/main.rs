//! Gapview - a terminal explorer for Gapminder country indicators.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gapview::app::{App, AppContext};
use gapview::config::Config;
use gapview::data::{DataLoader, NumericField, DEFAULT_EXCLUDED_COUNTRY};
use gapview::ui;
use gapview::util::LayoutConfig;
use gapview::view::ViewState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "gapview")]
#[command(about = "A terminal explorer for Gapminder country indicators", long_about = None)]
struct Args {
    /// Path to the dataset CSV (default: Data/gapminder_tidy.csv)
    file: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exclude all rows for a country (repeatable)
    #[arg(long = "exclude", value_name = "COUNTRY")]
    exclude: Vec<String>,

    /// Do not apply the built-in exclusion of "Congo, Dem. Rep."
    #[arg(long)]
    no_default_exclusions: bool,

    /// Initial year
    #[arg(long)]
    year: Option<i32>,

    /// Initial x-axis field
    #[arg(short = 'x', long, value_name = "FIELD")]
    x_field: Option<String>,

    /// Initial y-axis field
    #[arg(short = 'y', long, value_name = "FIELD")]
    y_field: Option<String>,

    /// Field delimiter of the dataset
    #[arg(long)]
    delimiter: Option<char>,

    /// Print the initial view as TSV and exit
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Gapview");
    }

    let config = build_config(&args)?;
    let dataset = DataLoader::load(&config.data_path, &config.load_options())
        .with_context(|| format!("Failed to load dataset {}", config.data_path.display()))?;
    let context = AppContext::new(config.data_path.clone(), dataset);

    let (first, _) = context.table.year_range();
    let year = config.initial_year(|y| context.table.contains_year(y), first);
    let initial = ViewState::new(year, config.x_field, config.y_field);
    let app = App::new(context, initial).context("Invalid initial view")?;

    if args.print {
        let mut stdout = io::stdout().lock();
        if let Some(projection) = app.projection() {
            projection.write_tsv(&mut stdout)?;
        }
        stdout.flush()?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, &LayoutConfig::default());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Gapview exited");
    }

    Ok(())
}

/// Merge the config file (if any) with command line flags. Flags win.
fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(file) = &args.file {
        config.data_path = file.clone();
    }
    if args.no_default_exclusions {
        config
            .exclude_countries
            .retain(|c| c != DEFAULT_EXCLUDED_COUNTRY);
    }
    for country in &args.exclude {
        if !config.exclude_countries.contains(country) {
            config.exclude_countries.push(country.clone());
        }
    }
    if let Some(year) = args.year {
        config.start_year = Some(year);
    }
    if let Some(name) = &args.x_field {
        config.x_field = name.parse::<NumericField>()?;
    }
    if let Some(name) = &args.y_field {
        config.y_field = name.parse::<NumericField>()?;
    }
    if let Some(delimiter) = args.delimiter {
        anyhow::ensure!(
            delimiter.is_ascii(),
            "Delimiter must be a single ASCII character"
        );
        config.delimiter = delimiter;
    }

    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    layout: &LayoutConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, layout))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Widget focus
                    (KeyModifiers::NONE, KeyCode::Tab) => app.focus_next(),
                    (_, KeyCode::BackTab) => app.focus_prev(),

                    // Adjust focused widget
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => app.adjust(-1),
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => app.adjust(1),
                    (KeyModifiers::NONE, KeyCode::PageDown) => app.adjust(-10),
                    (KeyModifiers::NONE, KeyCode::PageUp) => app.adjust(10),
                    (KeyModifiers::NONE, KeyCode::Home) => app.first_year(),
                    (KeyModifiers::NONE, KeyCode::End) => app.last_year(),

                    // Hover
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.hover_next(),
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.hover_prev(),
                    (KeyModifiers::NONE, KeyCode::Esc) => app.clear_hover(),

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_hovered(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    _ => {},
                }
            }
        }
    }
}

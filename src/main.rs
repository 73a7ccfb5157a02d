//! Command-line host for the list adapter.
//!
//! Loads items from a JSON file, replays filter and selection requests
//! against a [`ListAdapter`](listadapter::ListAdapter) and paints the
//! resulting rows to the terminal.
//!
//! # Usage
//!
//! ```text
//! listadapter --items fruit.json --config rows.toml --filter an --toggle 0 --click 0
//! ```
//!
//! Requests are applied in the order they appear on the command line, so
//! `--toggle 0 --clear --toggle 1` leaves only row 1 selected. Clicks are
//! reported by original index on stderr.

#![allow(clippy::multiple_crate_versions)]

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use listadapter::adapter::{handle_event, Action, Event};
use listadapter::domain::Item;
use listadapter::ui::image::AssetImageLoader;
use listadapter::ui::renderer::{render, AnsiRenderer, RowRenderer};
use listadapter::{initialize, Config, ListAdapterError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render a filterable, selectable list in the terminal.
#[derive(Debug, Parser)]
#[command(name = "listadapter", version, about)]
struct Cli {
    /// JSON file holding an array of strings or {"MainText", "Description", "Image"} records.
    #[arg(long, short)]
    items: PathBuf,

    /// TOML file with row configuration.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Filter query applied before selection.
    #[arg(long, short)]
    filter: Option<String>,

    /// Clear selections before applying toggles and changes.
    #[arg(long)]
    clear: bool,

    /// Single-select the row at this displayed position (repeatable).
    #[arg(long, short)]
    toggle: Vec<usize>,

    /// Flip selection of the row at this displayed position (repeatable).
    #[arg(long)]
    change: Vec<usize>,

    /// Click the row at this displayed position (repeatable).
    #[arg(long)]
    click: Vec<usize>,

    /// Terminal width in columns.
    #[arg(long, short, default_value_t = 80)]
    width: usize,

    /// Tracing level, overriding the configuration file.
    #[arg(long)]
    trace_level: Option<String>,
}

impl Cli {
    /// Requests in command-line order.
    fn events(&self, matches: &ArgMatches) -> Vec<Event> {
        let mut events: Vec<(usize, Event)> = Vec::new();
        if let (Some(query), Some(index)) = (&self.filter, matches.index_of("filter")) {
            events.push((index, Event::Filter(query.clone())));
        }
        if let (true, Some(index)) = (self.clear, matches.index_of("clear")) {
            events.push((index, Event::ClearSelections));
        }
        events.extend(positioned(matches, "toggle", &self.toggle, Event::ToggleSelection));
        events.extend(positioned(matches, "change", &self.change, Event::ChangeSelection));
        events.extend(positioned(matches, "click", &self.click, Event::Click));

        events.sort_by_key(|(index, _)| *index);
        events.into_iter().map(|(_, event)| event).collect()
    }
}

/// Pairs each value of a repeatable position option with its argv index.
fn positioned(
    matches: &ArgMatches,
    id: &str,
    values: &[usize],
    event: fn(usize) -> Event,
) -> Vec<(usize, Event)> {
    matches
        .indices_of(id)
        .into_iter()
        .flatten()
        .zip(values.iter().copied().map(event))
        .collect()
}

fn load_items(path: &Path) -> listadapter::Result<Vec<Item>> {
    let contents = std::fs::read_to_string(path)?;
    let items = serde_json::from_str(&contents)?;
    Ok(items)
}

fn run(cli: &Cli, matches: &ArgMatches) -> listadapter::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.trace_level.is_some() {
        config.trace_level.clone_from(&cli.trace_level);
    }

    let items = load_items(&cli.items)?;
    let mut adapter = initialize(&config, items);
    adapter.set_on_item_click(|index| eprintln!("clicked item {index}"));

    let mut renderer = AnsiRenderer::new(
        std::io::stdout().lock(),
        cli.width,
        AssetImageLoader::new(&config.asset_dir),
    );

    for event in cli.events(matches) {
        for action in handle_event(&mut adapter, &event) {
            match action {
                Action::Refresh(refresh) => renderer.refresh(&refresh),
                Action::ItemClicked(index) => tracing::debug!(index, "click forwarded"),
            }
        }
    }

    render(&adapter, &mut renderer);
    eprintln!(
        "{} of {} items shown, selected: {:?}",
        adapter.count(),
        adapter.original().len(),
        adapter.selected_indices()
    );
    Ok(())
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    match run(&cli, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("listadapter: {e}");
            if matches!(e, ListAdapterError::Config(_)) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use gamebryo_core::{Engine, EngineOptions, SaveGameRecord};
use gamebryo_render::{
    FieldSelection, JsonStyle, TextRenderOptions, render_json_full, render_json_selected,
    render_text_with_options, selected_pairs, write_screenshot_png,
};
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE", required = true)]
    paths: Vec<PathBuf>,
    #[arg(long)]
    game: bool,
    #[arg(long)]
    slot: bool,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    location: bool,
    #[arg(long)]
    created: bool,
    #[arg(long = "screenshot-size")]
    screenshot_size: bool,
    #[arg(long)]
    plugins: bool,
    #[arg(long)]
    json: bool,
    /// Write the save's screenshot to this PNG file.
    #[arg(long, value_name = "PNG")]
    screenshot: Option<PathBuf>,
    /// Refuse to decode files larger than this many bytes.
    #[arg(long = "max-size", value_name = "BYTES", env = "GAMEBRYO_SAVE_MAX_SIZE")]
    max_size: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            game: self.game,
            slot: self.slot,
            name: self.name,
            level: self.level,
            location: self.location,
            created: self.created,
            screenshot_size: self.screenshot_size,
            plugins: self.plugins,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.screenshot.is_some() && cli.paths.len() != 1 {
        eprintln!("--screenshot requires exactly one save file");
        process::exit(2);
    }

    let fields = cli.field_selection();
    let engine = Engine::with_options(EngineOptions {
        max_input_len: cli.max_size,
    });

    let mut records = Vec::with_capacity(cli.paths.len());
    let mut failed = false;
    for path in &cli.paths {
        match decode_one(&engine, path) {
            Some(record) => records.push((path, record)),
            None => failed = true,
        }
    }

    if let Some(png_path) = &cli.screenshot
        && let Some((_, record)) = records.first()
    {
        write_screenshot_png(record.screenshot(), png_path).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", png_path.display());
            process::exit(1);
        });
        tracing::info!(path = %png_path.display(), "wrote screenshot");
    }

    if cli.json {
        if !records.is_empty() {
            print_json(&records, &fields, cli.paths.len() == 1);
        }
    } else {
        let options = TextRenderOptions {
            verbose: cli.verbose,
        };
        print_text(&records, &fields, options, cli.paths.len() > 1);
    }

    if failed {
        process::exit(1);
    }
}

fn decode_one(engine: &Engine, path: &Path) -> Option<SaveGameRecord> {
    tracing::debug!(path = %path.display(), "decoding save");
    match engine.open_path(path) {
        Ok(record) => {
            tracing::info!(
                path = %path.display(),
                game = record.game().as_str(),
                plugins = record.plugins().len(),
                "decoded save"
            );
            Some(record)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), code = ?e.code(), "decode failed");
            eprintln!("Error parsing save file: {}", path.display());
            eprintln!("  {e}");
            None
        }
    }
}

fn print_json(records: &[(&PathBuf, SaveGameRecord)], fields: &FieldSelection, single: bool) {
    let mut rendered: Vec<JsonValue> = records
        .iter()
        .map(|(_, record)| {
            if fields.is_any_selected() {
                render_json_selected(record, fields, JsonStyle::CanonicalV1)
            } else {
                render_json_full(record, JsonStyle::CanonicalV1)
            }
        })
        .collect();
    let json = if single && rendered.len() == 1 {
        rendered.swap_remove(0)
    } else {
        JsonValue::Array(rendered)
    };
    let text = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{text}");
}

fn print_text(
    records: &[(&PathBuf, SaveGameRecord)],
    fields: &FieldSelection,
    options: TextRenderOptions,
    with_headers: bool,
) {
    for (index, (path, record)) in records.iter().enumerate() {
        if with_headers {
            if index > 0 {
                println!();
            }
            println!("==> {} <==", path.display());
        }
        if fields.is_any_selected() {
            for (key, value) in selected_pairs(record, fields) {
                println!("{key}={value}");
            }
        } else {
            print!("{}", render_text_with_options(record, options));
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

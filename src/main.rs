//! linegrid - terminal editor for bill-of-materials lines

mod config;
mod error;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Context;
use linegrid_core::storage::{load_catalog, load_lines, write_lines_csv};
use linegrid_core::{Catalog, Editor, GridRenderer, TextRenderer};
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: linegrid [OPTIONS] [LINES_FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [LINES_FILE]              Line list to open (.json)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <FILE>          Item and unit catalog (.json)");
    eprintln!("  --config <FILE>           Use this config instead of the user config");
    eprintln!("  -o, --output <FILE>       Export all lines to CSV (non-interactive)");
    eprintln!("  --dump                    Print the grid as text and exit");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    lines_file: Option<PathBuf>,
    catalog_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    dump: bool,
}

fn build_editor(opts: &Options, settings: &config::Settings) -> anyhow::Result<Editor> {
    let lines = match opts.lines_file.as_ref() {
        Some(path) => load_lines(path)
            .with_context(|| format!("failed to load lines from {}", path.display()))?,
        None => Vec::new(),
    };
    let catalog = match opts.catalog_file.as_ref() {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::default(),
    };
    let mut editor = Editor::new(settings.layout.clone(), catalog, lines);
    editor.file_path = opts.lines_file.clone();
    Ok(editor)
}

fn run(opts: Options) -> anyhow::Result<()> {
    let (settings, warnings) = config::load_settings(opts.config_file.as_deref())?;
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let editor = build_editor(&opts, &settings)?;

    if let Some(output_path) = opts.output_file.as_ref() {
        write_lines_csv(output_path, &editor)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        println!("Exported to {}", output_path.display());
        return Ok(());
    }

    if opts.dump {
        print!("{}", TextRenderer.render(&editor.view(false)));
        return Ok(());
    }

    run_interactive(editor, &settings)
}

#[cfg(feature = "tui")]
fn run_interactive(editor: Editor, settings: &config::Settings) -> anyhow::Result<()> {
    let mut app = tui::App::new(editor, settings, Box::new(tui::SystemClipboard));
    tui::run(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_editor: Editor, _settings: &config::Settings) -> anyhow::Result<()> {
    anyhow::bail!("built without the terminal UI; use --output or --dump")
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options {
        lines_file: None,
        catalog_file: None,
        config_file: None,
        output_file: None,
        dump: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            flag @ ("--catalog" | "--config" | "-o" | "--output") => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: {} requires a file path", flag);
                    std::process::exit(1);
                }
                let path = Some(PathBuf::from(&args[i]));
                match flag {
                    "--catalog" => opts.catalog_file = path,
                    "--config" => opts.config_file = path,
                    _ => opts.output_file = path,
                }
            }
            "--dump" => opts.dump = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if opts.lines_file.is_none() {
                    opts.lines_file = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

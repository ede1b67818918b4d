//! Anchor Layout CLI
//!
//! Usage:
//!   anchor-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>   Theme file for colors and font (TOML format)
//!   -o, --output <FILE>  Write SVG to a file instead of stdout
//!   -s, --schema         Show the source schema reference
//!   -e, --example        Print a complete example source
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use anchor_layout::{
    render_with_config, RenderConfig, RenderError, SourceStore, Theme, Viewport, EXAMPLE_SOURCE,
};

#[derive(Parser)]
#[command(name = "anchor-layout")]
#[command(about = "Constraint-anchored rectangle layout engine")]
struct Cli {
    /// Input file (defaults to ./layout.json when present, else stdin)
    input: Option<PathBuf>,

    /// Theme file for colors and font (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write SVG to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Viewport width in layout units
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in layout units
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Debug mode: dump solved rectangles to stderr
    #[arg(short, long)]
    debug: bool,

    /// Show the source schema reference
    #[arg(short, long)]
    schema: bool,

    /// Print a complete example source
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.schema {
        print_schema();
        return;
    }

    if cli.example {
        print_example();
        return;
    }

    // Resolve input: an explicit file, the well-known store location, or stdin
    let input = resolve_input(cli.input.clone(), &SourceStore::default());

    // If no input at all and stdin is a terminal (interactive), show intro help
    if input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    // Read input
    let source = match &input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Render at the requested viewport
    let config = RenderConfig::new()
        .with_viewport(Viewport::new(cli.width, cli.height))
        .with_theme(theme)
        .with_debug(cli.debug);
    match render_with_config(&source, config) {
        Ok(svg) => match &cli.output {
            Some(path) => {
                if let Err(e) = fs::write(path, svg) {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            }
            None => println!("{}", svg),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            if let RenderError::Layout(layout_error) = &e {
                if let Some(suggestions) = layout_error.suggestions() {
                    if !suggestions.is_empty() {
                        eprintln!("Did you mean: {}?", suggestions.join(", "));
                    }
                }
            }
            std::process::exit(1);
        }
    }
}

/// Pick where the source comes from: an explicit path always wins, then the
/// store's well-known location when a file is actually there, else stdin
/// (`None`).
fn resolve_input(explicit: Option<PathBuf>, store: &SourceStore) -> Option<PathBuf> {
    explicit.or_else(|| store.path().exists().then(|| store.path().to_path_buf()))
}

fn print_intro() {
    println!(
        r#"Anchor Layout - constraint-anchored rectangle layout engine

USAGE:
    anchor-layout [OPTIONS] [FILE]
    echo '<json>' | anchor-layout

OPTIONS:
    -s, --schema       Show the source schema reference
    -e, --example      Print a complete example source
    -t, --theme        Custom colors and font (TOML file)
    -o, --output       Write SVG to a file instead of stdout
    --width, --height  Viewport extent (default 1280x720)
    -d, --debug        Dump solved rectangles to stderr
    -h, --help         Print help

FILE defaults to ./layout.json when one exists.

QUICK START:
    anchor-layout --example > layout.json
    anchor-layout -o output.svg

Each element anchors its sides to screen edges or to other elements;
the solver orders the dependencies and places every rectangle.
Run --schema for the source format reference."#
    );
}

fn print_schema() {
    println!("{}", schema_text());
}

// The theme sample embeds `"#`, so the delimiters must be two hashes wide.
fn schema_text() -> &'static str {
    r##"ANCHOR LAYOUT SOURCE SCHEMA
===========================

A layout source is a JSON object mapping element names to definitions:

    {
      "Name": {
        "content":     { "text": "...", "width": 100, "height": 50 },
        "constraints": { ... }
      }
    }

Definition order is meaningful: elements register in order, and later
elements paint over earlier ones.

CONTENT
-------
text    Label drawn at the element's top left corner
width   Declared width, used when the left/right pair does not pin it
height  Declared height, used when the top/bottom pair does not pin it
color   Optional [r, g, b, a] with channels in 0..1 (default opaque white)

CONSTRAINTS
-----------
Up to four entries, keyed by the element's own side:

    "left": { "name": "Header", "direction": "bottom", "value": 10 }

name       Element to anchor to, or a screen edge (see RESERVED NAMES)
direction  Side of the target to read: left, right, top or bottom
value      Offset: added on left/top slots, subtracted on right/bottom

Anchors may reference elements defined later in the document. What they
may not do is depend on each other in a cycle; cycles are rejected with
the member names.

RESERVED NAMES
--------------
ScreenLeft, ScreenRight, ScreenTop and ScreenBottom resolve against the
viewport edges and cannot be used as element names.

SIZING
------
Neither side anchored    position 0, extent 0
One side anchored        declared extent, placed against that side
Both sides anchored      stretched between them when the declared extent
                         is 0, otherwise centered in the viewport at the
                         declared extent

THEME (--theme FILE)
--------------------
    [colors]
    background = "#003366"
    text = "#ffffff"

    [font]
    family = "Segoe UI Light"
    size = 16.0

All keys are optional; missing ones keep their defaults."##
}

fn print_example() {
    // Pure JSON so the output can be piped straight into a source file.
    println!("{}", EXAMPLE_SOURCE);
}

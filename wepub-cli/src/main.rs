// Command-line interface for wepub
//
// This binary renders Markdown documents into inline-styled HTML ready to
// paste into WeChat public account articles, using CSS themes from a theme
// directory.
//
// Usage:
//  wepub <input> [--theme <id>] [-o <file>]      - Render a document (default)
//  wepub convert <input> [--theme <id>]          - Same as above (explicit)
//  wepub themes [--theme-dir <dir>]              - List discovered themes
//  wepub theme-json <theme.css>                  - Dump a parsed theme as JSON
//  wepub frontmatter <input>                     - Print a document's front matter
//
// Configuration is layered: embedded defaults, then an optional wepub.toml
// in the working directory, then --config, then individual flags.

mod themes;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};
use themes::ThemeRepository;
use wepub_config::{Loader, WepubConfig};
use wepub_render::{
    extract_frontmatter, parse_theme, render, Settings, ThemeStyles, NUMBERING_CHINESE_DOT,
    NUMBERING_NUMBER_DOT,
};

fn build_cli() -> Command {
    Command::new("wepub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown into inline-styled HTML for WeChat articles")
        .long_about(
            "wepub converts Markdown documents into a single self-contained HTML\n\
            fragment with every style inlined, ready to paste into an editor that\n\
            strips stylesheets and classes.\n\n\
            Examples:\n  \
            wepub post.md --theme mint               # Render with a theme (stdout)\n  \
            wepub post.md -o post.html               # Render to a file\n  \
            wepub themes --theme-dir ./themes        # List available themes\n  \
            wepub theme-json themes/mint.css         # Inspect a parsed theme",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wepub.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a Markdown document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .value_name("ID")
                        .help("Theme id to render with (file stem in the theme directory)"),
                )
                .arg(
                    Arg::new("theme-dir")
                        .long("theme-dir")
                        .value_name("DIR")
                        .help("Directory scanned for *.css themes")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("font-size")
                        .long("font-size")
                        .value_name("SIZE")
                        .help("Base font size for the output, 14px-18px"),
                )
                .arg(
                    Arg::new("numbering")
                        .long("numbering")
                        .value_name("STYLE")
                        .help("Heading numbering style")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            NUMBERING_NUMBER_DOT,
                            NUMBERING_CHINESE_DOT,
                        ])),
                )
                .arg(
                    Arg::new("primary-color")
                        .long("primary-color")
                        .value_name("COLOR")
                        .help("Override the theme's --primary-color"),
                )
                .arg(
                    Arg::new("image-domain")
                        .long("image-domain")
                        .value_name("URL")
                        .help("Domain prefixed onto relative image URLs"),
                )
                .arg(
                    Arg::new("force-line-breaks")
                        .long("force-line-breaks")
                        .help("Convert single newlines into <br> breaks")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("reference-links")
                        .long("reference-links")
                        .help("Rewrite links as numbered references with a trailing list")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("themes")
                .about("List themes discovered in the theme directory")
                .arg(
                    Arg::new("theme-dir")
                        .long("theme-dir")
                        .value_name("DIR")
                        .help("Directory scanned for *.css themes")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("theme-json")
                .about("Parse a theme stylesheet and print it as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to a theme .css file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("frontmatter")
                .about("Print a document's front matter block")
                .arg(
                    Arg::new("input")
                        .help("Input Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // If the first argument looks like a file rather than a subcommand,
    // inject "convert" so `wepub doc.md` works.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && !["convert", "themes", "theme-json", "frontmatter", "help"]
                    .contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let mut settings: Settings = (&config.render).into();
            if let Some(font_size) = sub_matches.get_one::<String>("font-size") {
                if !Settings::is_valid_font_size(font_size) {
                    eprintln!("Invalid font size '{font_size}': expected 14px-18px");
                    std::process::exit(2);
                }
                settings.font_size = font_size.clone();
            }
            if let Some(numbering) = sub_matches.get_one::<String>("numbering") {
                settings.heading_numbering_style = numbering.clone();
            }
            if let Some(color) = sub_matches.get_one::<String>("primary-color") {
                settings.primary_color = color.clone();
            }
            if let Some(domain) = sub_matches.get_one::<String>("image-domain") {
                settings.image_domain = domain.clone();
            }
            if sub_matches.get_flag("force-line-breaks") {
                settings.force_line_breaks = true;
            }
            if sub_matches.get_flag("reference-links") {
                settings.enable_reference_links = true;
            }

            let theme_dir = sub_matches
                .get_one::<String>("theme-dir")
                .cloned()
                .unwrap_or_else(|| config.theme.directory.clone());
            let theme_id = sub_matches
                .get_one::<String>("theme")
                .cloned()
                .unwrap_or_else(|| config.theme.current.clone());

            handle_convert_command(
                input,
                &theme_dir,
                &theme_id,
                &settings,
                sub_matches.get_one::<String>("output").map(PathBuf::from),
            );
        }
        Some(("themes", sub_matches)) => {
            let theme_dir = sub_matches
                .get_one::<String>("theme-dir")
                .cloned()
                .unwrap_or_else(|| config.theme.directory.clone());
            handle_themes_command(&theme_dir, &config.theme.current);
        }
        Some(("theme-json", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_theme_json_command(path);
        }
        Some(("frontmatter", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_frontmatter_command(input);
        }
        _ => {
            // arg_required_else_help already covers the bare invocation.
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WepubConfig {
    let loader = Loader::new().with_optional_file("wepub.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Resolve the theme styles for a convert invocation. An empty theme
/// directory means unstyled output; an unknown theme id is a warning,
/// not an error, so a document still renders.
fn resolve_theme(theme_dir: &str, theme_id: &str) -> ThemeStyles {
    if theme_dir.is_empty() {
        return ThemeStyles::new();
    }
    let repository = ThemeRepository::load(Path::new(theme_dir)).unwrap_or_else(|err| {
        eprintln!("Failed to read theme directory '{theme_dir}': {err}");
        std::process::exit(1);
    });
    match repository.styles(theme_id) {
        Some(Ok(styles)) => styles,
        Some(Err(err)) => {
            eprintln!("Failed to read theme '{theme_id}': {err}");
            std::process::exit(1);
        }
        None => {
            // Fall back to the first discovered theme before giving up.
            let fallback = repository.themes().first().map(|theme| theme.id.clone());
            match fallback.and_then(|id| repository.styles(&id)) {
                Some(Ok(styles)) => {
                    eprintln!("Theme '{theme_id}' not found in '{theme_dir}', using the first discovered theme");
                    styles
                }
                _ => {
                    eprintln!("Theme '{theme_id}' not found in '{theme_dir}', rendering unstyled");
                    ThemeStyles::new()
                }
            }
        }
    }
}

fn handle_convert_command(
    input: &str,
    theme_dir: &str,
    theme_id: &str,
    settings: &Settings,
    output: Option<PathBuf>,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|err| {
        eprintln!("Failed to read '{input}': {err}");
        std::process::exit(1);
    });

    let theme = resolve_theme(theme_dir, theme_id);
    let html = render(&source, &theme, settings).unwrap_or_else(|err| {
        eprintln!("Failed to render '{input}': {err}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            if let Err(err) = fs::write(&path, html) {
                eprintln!("Failed to write '{}': {err}", path.display());
                std::process::exit(1);
            }
        }
        None => println!("{html}"),
    }
}

fn handle_themes_command(theme_dir: &str, current: &str) {
    if theme_dir.is_empty() {
        eprintln!("No theme directory configured; set [theme].directory or pass --theme-dir");
        std::process::exit(1);
    }
    let repository = ThemeRepository::load(Path::new(theme_dir)).unwrap_or_else(|err| {
        eprintln!("Failed to read theme directory '{theme_dir}': {err}");
        std::process::exit(1);
    });
    for theme in repository.themes() {
        let marker = if theme.id == current { "*" } else { " " };
        match &theme.description {
            Some(description) => println!("{marker} {} - {} ({description})", theme.id, theme.name),
            None => println!("{marker} {} - {}", theme.id, theme.name),
        }
    }
}

fn handle_theme_json_command(path: &str) {
    let css = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Failed to read '{path}': {err}");
        std::process::exit(1);
    });
    let styles = parse_theme(&css);
    let json = serde_json::to_string_pretty(&styles).unwrap_or_else(|err| {
        eprintln!("Failed to serialize theme: {err}");
        std::process::exit(1);
    });
    println!("{json}");
}

fn handle_frontmatter_command(input: &str) {
    let source = fs::read_to_string(input).unwrap_or_else(|err| {
        eprintln!("Failed to read '{input}': {err}");
        std::process::exit(1);
    });
    match extract_frontmatter(&source) {
        Some(frontmatter) => println!("{frontmatter}"),
        None => {
            eprintln!("No front matter in '{input}'");
            std::process::exit(1);
        }
    }
}

// Command-line interface for prosedown
//
// This binary converts between Markdown text and the editor document JSON
// produced by the prosedown library, and normalizes Markdown into the
// canonical print style.
//
// Converting:
//
// The conversion needs a from/to pair. The from side can be auto-detected
// from the file extension (.md/.markdown → markdown, .json → document),
// while being overwrittable by an explicit --from flag.
// Usage:
//  prosedown <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  prosedown convert <input> --to <format> [...]                        - Same, explicit
//  prosedown normalize <input>                                          - Canonical Markdown to stdout
//  prosedown --list-plugins                                             - List active plugins
//
// A document payload that fails to parse is substituted with the empty
// document rather than aborting; the substitution is reported on stderr.

use clap::{Arg, ArgAction, Command, ValueHint};
use prosedown::{
    document_to_markdown, markdown_to_document, normalize_markdown, registry, DocToMdOptions,
    Document, MdToDocOptions,
};
use prosedown_config::{Loader, ProsedownConfig};
use std::fs;
use std::path::Path;

const AVAILABLE_FORMATS: &[&str] = &["markdown", "document"];

fn build_cli() -> Command {
    Command::new("prosedown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between Markdown and editor documents")
        .long_about(
            "prosedown converts Markdown text to and from the JSON document\n\
            tree used by a block/inline rich-text editor.\n\n\
            Commands:\n  \
            - convert:   Transform between markdown and document JSON\n  \
            - normalize: Reprint Markdown in the canonical style\n\n\
            Examples:\n  \
            prosedown notes.md --to document           # Markdown to document JSON (stdout)\n  \
            prosedown doc.json --to markdown -o out.md # Document JSON to Markdown file\n  \
            prosedown normalize notes.md               # Canonical Markdown to stdout",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-plugins")
                .long("list-plugins")
                .help("List active conversion plugins")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a prosedown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between Markdown and document JSON (default command)")
                .long_about(
                    "Convert between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown text (.md, .markdown)\n  \
                    - document: Editor document JSON (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    prosedown convert notes.md --to document\n  \
                    prosedown convert doc.json --to markdown -o notes.md\n  \
                    prosedown notes.md --to document      # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Reprint a Markdown file in the canonical style")
                .long_about(
                    "Parse the input Markdown and reprint it in the canonical\n\
                    style: dash bullets, non-incrementing ordered markers,\n\
                    backtick fences, three-dash rules and ATX headings.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    prosedown normalize notes.md                # Canonical form to stdout\n  \
                    prosedown normalize notes.md > clean.md     # Redirect to file",
                )
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

    // Try to parse args. If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(error) => {
            // A first argument that looks like a file means the user skipped
            // the subcommand; retry with "convert" injected.
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "normalize"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(matches) => matches,
                    Err(retry_error) => retry_error.exit(),
                }
            } else {
                error.exit();
            }
        }
    };

    if matches.get_flag("list-plugins") {
        for name in registry::list_active() {
            println!("{name}");
        }
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let from_arg = sub_matches.get_one::<String>("from");

            // Auto-detect --from if not provided
            let from = if let Some(from) = from_arg {
                from.to_string()
            } else {
                match detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_normalize_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(path: Option<&str>) -> ProsedownConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("prosedown.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

/// Detect format from filename based on file extension
fn detect_format_from_filename(filename: &str) -> Option<String> {
    let extension = Path::new(filename).extension()?.to_str()?;
    match extension {
        "md" | "markdown" => Some("markdown".to_string()),
        "json" => Some("document".to_string()),
        _ => None,
    }
}

fn report_gap(message: &str) {
    eprintln!("prosedown: {message}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &ProsedownConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let on_warn = config.convert.warn_on_gaps.then_some(report_gap as fn(&str));

    let rendered = match (from, to) {
        ("markdown", "document") => {
            let doc = markdown_to_document(
                &source,
                &MdToDocOptions {
                    plugins: None,
                    on_warn,
                },
            );
            let mut json = if config.convert.pretty_json {
                serde_json::to_string_pretty(&doc)
            } else {
                serde_json::to_string(&doc)
            }
            .unwrap_or_else(|e| {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            });
            json.push('\n');
            json
        }
        ("document", "markdown") => {
            // The reference policy for unparseable payloads: substitute the
            // empty document and continue.
            let doc: Document = serde_json::from_str(&source).unwrap_or_else(|e| {
                eprintln!("Warning: input is not a document ({e}); substituting an empty document");
                Document::default()
            });
            let options = DocToMdOptions {
                plugins: None,
                style: (&config.style).into(),
                on_warn,
            };
            document_to_markdown(&doc, &options).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            })
        }
        ("markdown", "markdown") => normalize_markdown(&source).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        (from, to) => {
            eprintln!("Error: Cannot convert from '{from}' to '{to}'");
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{rendered}"),
    }
}

/// Handle the normalize command (always writes to stdout)
fn handle_normalize_command(input: &str) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let normalized = normalize_markdown(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    print!("{normalized}");
}

use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats handled by src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["markdown", "document"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("prosedown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between Markdown and editor documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-plugins")
                .long("list-plugins")
                .help("List active conversion plugins")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
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
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("normalize").arg(
                Arg::new("input")
                    .help("Input Markdown file")
                    .required(true)
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "prosedown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "prosedown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "prosedown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

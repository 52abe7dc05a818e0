use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn completion_cli() -> Command {
    Command::new("tana2")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert text documents to Tana Paste")
        .arg_required_else_help(true)
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("input")
                .help("Input file to convert ('-' reads stdin)")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Force a renderer instead of auto-detecting")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_name("BYTES")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("split-size")
                .long("split-size")
                .value_name("BYTES")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available renderers")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("detect")
                .about("Report which renderer would handle the input")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tana2", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tana2", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tana2", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

// Command-line interface for tana-convert
//
// This binary turns text documents into Tana Paste. All conversion logic lives
// in the tana-convert library; this layer deals with files, stdin/stdout and
// configuration.
//
// Usage:
//  tana2 <input> [-o <file>]         - Convert a file ('-' reads stdin)
//  tana2 <input> --format pendant    - Skip detection and force a renderer
//  tana2 detect <input> [--json]     - Report which renderer would handle the input
//  tana2 --list-formats              - List available renderers
//
// Output goes to stdout by default. With -o, output larger than the configured
// paste.split_size is written as numbered files (name_1.ext, name_2.ext, ...)
// so each piece stays under Tana's paste limit.
//
// Configuration is read from tana.toml in the working directory when present,
// or from an explicit --config path. The --chunk-size and --split-size flags
// override the corresponding configuration keys for a single run.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::Read;
use std::path::Path;
use tana_config::{Loader, TanaConfig};
use tana_convert::{convert_with_options, split_paste, ConvertOptions, RendererRegistry};

fn build_cli() -> Command {
    Command::new("tana2")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert text documents to Tana Paste")
        .long_about(
            "tana2 converts text documents into Tana Paste, ready to paste into Tana.\n\n\
            The input dialect (Markdown, speaker transcripts, YouTube extracts) is\n\
            auto-detected; use --format to force a specific renderer.\n\n\
            Examples:\n  \
            tana2 notes.md                      # Convert to stdout\n  \
            pbpaste | tana2 -                   # Convert the clipboard\n  \
            tana2 meeting.txt -o meeting.tana   # Write to a file (split when oversized)\n  \
            tana2 detect meeting.txt            # Show which renderer would run\n  \
            tana2 --list-formats                # List renderers in detection order",
        )
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
                .long_help(
                    "Path to write the converted output.\n\n\
                    If not specified, output is written to stdout. Output larger\n\
                    than the configured paste.split_size is written as numbered\n\
                    files instead (name_1.ext, name_2.ext, ...).",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Force a renderer instead of auto-detecting")
                .long_help(
                    "Renderer to use, bypassing auto-detection.\n\n\
                    Use --list-formats to see the available names.",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_name("BYTES")
                .help("Maximum transcript chunk size (overrides chunking.max_size)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("split-size")
                .long("split-size")
                .value_name("BYTES")
                .help("Maximum size per output file (overrides paste.split_size)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tana.toml configuration file")
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
                        .help("Input file to inspect ('-' reads stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the detection result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if let Some(("detect", sub_matches)) = matches.subcommand() {
        handle_detect_command(sub_matches);
        return;
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    handle_convert_command(&matches);
}

/// Handle the default conversion command
fn handle_convert_command(matches: &ArgMatches) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);
    let config = load_convert_config(matches);
    let options = ConvertOptions::from(&config);

    let output = match matches.get_one::<String>("format") {
        Some(name) => {
            let registry = RendererRegistry::with_options(&options);
            let renderer = registry.get(name).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                eprintln!(
                    "Available formats: {}",
                    registry.list_renderers().join(", ")
                );
                std::process::exit(1);
            });
            renderer.render(&source).unwrap_or_else(|e| {
                eprintln!("Render error: {e}");
                std::process::exit(1);
            })
        }
        None => convert_with_options(&source, &options).unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        }),
    };

    match matches.get_one::<String>("output") {
        Some(path) => write_output(path, &output, config.paste.split_size),
        None => println!("{output}"),
    }
}

/// Handle the detect command
fn handle_detect_command(matches: &ArgMatches) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);
    let config = load_cli_config(matches);
    let options = ConvertOptions::from(&config);

    let registry = RendererRegistry::with_options(&options);
    let renderer = registry.detect(&source).unwrap_or_else(|| {
        eprintln!("No renderer matched the input");
        std::process::exit(1);
    });

    if matches.get_flag("json") {
        let result = serde_json::json!({
            "format": renderer.name(),
            "description": renderer.description(),
        });
        println!("{result}");
    } else {
        println!("{}", renderer.name());
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = RendererRegistry::with_defaults();
    println!("Available formats (detection order):");
    for name in registry.list_renderers() {
        match registry.get(&name) {
            Ok(renderer) if !renderer.description().is_empty() => {
                println!("  {name:<10} {}", renderer.description());
            }
            _ => println!("  {name}"),
        }
    }
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        buffer
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        })
    }
}

/// Write the paste to a file, splitting into numbered parts when oversized.
fn write_output(path: &str, output: &str, split_size: usize) {
    let pieces = split_paste(output, split_size);
    if pieces.len() == 1 {
        fs::write(path, &pieces[0]).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        });
        return;
    }
    for (i, piece) in pieces.iter().enumerate() {
        let part_path = numbered_path(path, i + 1);
        fs::write(&part_path, piece).unwrap_or_else(|e| {
            eprintln!("Error writing file '{part_path}': {e}");
            std::process::exit(1);
        });
        println!("Created part {} in {part_path}", i + 1);
    }
}

/// Insert a part number before the extension: notes.tana -> notes_2.tana
fn numbered_path(path: &str, index: usize) -> String {
    let p = Path::new(path);
    let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or(path);
    let name = match p.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{index}.{ext}"),
        None => format!("{stem}_{index}"),
    };
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(name).to_string_lossy().into_owned()
        }
        _ => name,
    }
}

fn load_cli_config(matches: &ArgMatches) -> TanaConfig {
    base_loader(matches).build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Configuration for the conversion command, with size flag overrides applied.
fn load_convert_config(matches: &ArgMatches) -> TanaConfig {
    let mut loader = base_loader(matches);
    if let Some(size) = matches.get_one::<usize>("chunk-size") {
        loader = apply_override(loader, "chunking.max_size", *size);
    }
    if let Some(size) = matches.get_one::<usize>("split-size") {
        loader = apply_override(loader, "paste.split_size", *size);
    }
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn base_loader(matches: &ArgMatches) -> Loader {
    let loader = Loader::new().with_optional_file("tana.toml");
    match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    }
}

fn apply_override(loader: Loader, key: &str, value: usize) -> Loader {
    loader.set_override(key, value as i64).unwrap_or_else(|err| {
        eprintln!("Failed to apply override for '{key}': {err}");
        std::process::exit(1);
    })
}

// Command-line interface for medtext
//
// This binary provides commands for converting, inspecting and validating escape-coded
// record text, plus a sample generator that drives the node builder.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  medtext <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  medtext convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  medtext inspect <path> [<transform>]      - Execute a transform (defaults to "nodes-treeviz")
//  medtext validate <path>                   - Check every line against the line length
//  medtext sample [--hello] [--to <format>]  - Print a document built with the node builder
//  medtext --list-formats                    - List available formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; known keys override the configuration, the rest
// are passed to the format/transform.
// Example:
//  medtext report.mtf --to html --extra-style proportional

use medtext_cli::{samples, transforms};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use medtext::builder::BuilderOptions;
use medtext::FormatRegistry;
use medtext_config::{HtmlStyle, Loader, MedtextConfig};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "validate", "sample", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("medtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting escape-coded record text")
        .long_about(
            "medtext works with clinical record text: plain text with backslash-delimited\n\
            escape codes for formatting and '~' marking the end of each line.\n\n\
            Commands:\n  \
            - convert:  Transform between formats (markup, html, treeviz, json)\n  \
            - inspect:  View the decoded node sequence\n  \
            - validate: Check line lengths\n  \
            - sample:   Print a document built with the node builder\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            medtext inspect report.mtf                   # Node tree\n  \
            medtext report.mtf --to html -o report.html  # HTML preview\n  \
            medtext validate report.mtf --extra-line-length 80",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a medtext.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - markup:  Escape-coded text (.mtf, .txt)\n  \
                    - html:    HTML preview page (.html)\n  \
                    - treeviz: Node tree (.tree)\n  \
                    - json:    Node dump (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
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
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
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
            Command::new("inspect")
                .about("Inspect the decoded node sequence")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'nodes-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check every line of a markup file against the line length")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("sample")
                .about("Print a sample document assembled with the node builder")
                .arg(
                    Arg::new("hello")
                        .long("hello")
                        .help("Print the hello-world document instead of the report")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to markup)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn parse_args(cleaned_args: &[String]) -> ArgMatches {
    let cli = build_cli();
    match cli.clone().try_get_matches_from(cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means the convert subcommand was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = parse_args(&cleaned_args);

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    log::debug!("effective configuration: {config:?}");

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("nodes-treeviz");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    registry
                        .detect_format_from_filename(input)
                        .unwrap_or_else(|| {
                            eprintln!("Error: Could not detect format from filename '{input}'");
                            eprintln!("Please specify --from explicitly");
                            std::process::exit(1);
                        })
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("validate", sub_matches)) => {
            let path = required(sub_matches, "path");
            handle_validate_command(path, &config);
        }
        Some(("sample", sub_matches)) => {
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or("markup");
            handle_sample_command(sub_matches.get_flag("hello"), to, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        })
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MedtextConfig,
) {
    let source = read_source(path);
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MedtextConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_source(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    if let Err(violation) = doc.validate(config.document.line_length) {
        log::warn!("{input}: {violation}");
    }

    let format_options = format_options_from_config(to, config, extra_params);
    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &result);
}

/// Handle the validate command
fn handle_validate_command(path: &str, config: &MedtextConfig) {
    let source = read_source(path);
    let registry = FormatRegistry::default();
    let doc = registry.parse(&source, "markup").unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let max = config.document.line_length;
    match doc.validate(max) {
        Ok(()) => println!("{path}: ok ({} nodes, line length {max})", doc.len()),
        Err(violation) => {
            eprintln!("{path}: {violation}");
            std::process::exit(1);
        }
    }
}

/// Handle the sample command
fn handle_sample_command(
    hello: bool,
    to: &str,
    extra_params: &HashMap<String, String>,
    config: &MedtextConfig,
) {
    let options = BuilderOptions::from(config.document);
    let doc = if hello {
        samples::hello_world(options)
    } else {
        samples::diagnostic_report(options)
    };

    let registry = FormatRegistry::default();
    let format_options = format_options_from_config(to, config, extra_params);
    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(None, &result);
    if to == "markup" {
        println!();
    }
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => fs::write(path, data).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{data}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let mut modes = Vec::new();
            if format.supports_parsing() {
                modes.push("parse");
            }
            if format.supports_serialization() {
                modes.push("serialize");
            }
            println!(
                "  {:<10} {} [{}] (.{})",
                format_name,
                format.description(),
                modes.join(", "),
                format.file_extensions().join(", .")
            );
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MedtextConfig {
    let loader = Loader::new().with_optional_file("medtext.toml");
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

fn apply_config_overrides(config: &mut MedtextConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["line-length", "max-line-length"]) {
        config.document.line_length = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid line length '{raw}' for --extra-line-length");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["local", "local-escape-codes"]) {
        config.document.supports_local_escape_codes = parse_bool_arg("local", &raw);
    }
    if let Some(raw) = extra_params.remove("show-index") {
        config.inspect.show_index = parse_bool_arg("show-index", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["style", "body-style"]) {
        config.convert.html.style = match raw.to_lowercase().as_str() {
            "fixed" | "monospace" => HtmlStyle::Fixed,
            "proportional" => HtmlStyle::Proportional,
            other => {
                eprintln!("Invalid style '{other}' for --extra-style (expected fixed or proportional)");
                std::process::exit(1);
            }
        };
    }
}

fn build_inspect_params(
    config: &MedtextConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-index".to_string(),
        config.inspect.show_index.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn format_options_from_config(
    to: &str,
    config: &MedtextConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = HashMap::new();
    if to == "html" {
        let style = match config.convert.html.style {
            HtmlStyle::Fixed => "fixed",
            HtmlStyle::Proportional => "proportional",
        };
        options.insert("style".to_string(), style.to_string());
    } else if to == "treeviz" {
        options.insert(
            "show-index".to_string(),
            config.inspect.show_index.to_string(),
        );
    }
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

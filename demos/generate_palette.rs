//! Command-line interface for swatchbook
//!
//! Generates a palette from a base color and prints it, with its
//! accessibility analysis, as JSON.

use std::{env, path::PathBuf, process};

use swatchbook::{
    describe_color, generate_random_color, GeneratorConfig, PaletteGenerator, PaletteReport,
    SchemeKind,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut scheme = None;
    let mut count = None;
    let mut base_color = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--scheme" | "--count" if i + 1 >= args.len() => {
                eprintln!("Error: {} requires a value", args[i]);
                process::exit(1);
            }
            "--config" => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--scheme" => {
                match SchemeKind::try_from_name(&args[i + 1]) {
                    Ok(kind) => scheme = Some(kind),
                    Err(error) => {
                        eprintln!("Warning: {}", error.user_message());
                        scheme = Some(SchemeKind::from_name(&args[i + 1]));
                    }
                }
                i += 1;
            }
            "--count" => {
                match args[i + 1].parse::<usize>() {
                    Ok(n) => count = Some(n),
                    Err(_) => {
                        eprintln!("Error: --count expects a positive integer");
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if base_color.is_none() {
                    base_color = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple base colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => match GeneratorConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };
    if let Some(scheme) = scheme {
        config.scheme = scheme;
    }
    if let Some(count) = count {
        config.count = count;
    }

    let base_color = base_color.unwrap_or_else(generate_random_color);
    if let Err(error) = describe_color(&base_color) {
        eprintln!("Error: {}", error.user_message());
        process::exit(1);
    }

    let generator = match PaletteGenerator::from_config(config) {
        Ok(generator) => generator,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    print_report(&generator.report(&base_color));
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [base_color]", program_name);
    eprintln!();
    eprintln!("Generate a color palette and check its contrast pairs.");
    eprintln!("A random base color is used when none is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load settings from a JSON file");
    eprintln!("  --scheme NAME    Palette scheme (e.g. triadic, splitComplementary)");
    eprintln!("  --count N        Number of colors");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#3366CC'", program_name);
    eprintln!("  {} --scheme square --count 8 ff8800", program_name);
}

fn print_report(report: &PaletteReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }

    eprintln!();
    eprintln!("Palette Summary:");
    eprintln!("  Scheme: {}", report.scheme.info().name);
    eprintln!("  Colors: {}", report.colors.join(" "));
    eprintln!(
        "  Readable pairs: {} of {}",
        report.readable_pairs,
        report.accessibility.len()
    );

    if report.readable_pairs == 0 {
        eprintln!("  Warning: No pair reaches 4.5:1. Add a darker or lighter color for text.");
    }
}

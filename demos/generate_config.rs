//! Generate a default palette configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};

use swatchbook::GeneratorConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} palettes/config.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = GeneratorConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Scheme:    {} ({} colors)", config.scheme, config.count);
            eprintln!("  Spread:    {:.0}°", config.analogous_spread);
            eprintln!("  Gradient:  {} steps", config.gradient_steps);
            eprintln!("  Text size: {}", config.text_size);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}

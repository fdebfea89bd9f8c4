//! Implementation of the `codefence resolve` command.
//!
//! Loads the optional preset store, page layer and settings, resolves the
//! block and prints the result.

use super::read_input;
use crate::cli::ResolveArgs;
use codefence::config::BlockConfig;
use codefence::engine::Resolution;
use codefence::merge::PresetStore;
use codefence::{CodefenceError, Result, Settings, parse_page_config, resolve_block};

/// Execute the `codefence resolve` command.
///
/// A filter failure is printed with the rest of the output and then
/// returned as an error so the exit code reflects it.
pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let presets = match &args.presets {
        Some(path) => PresetStore::load(path)?,
        None => PresetStore::new(),
    };
    let page: Option<BlockConfig> = match &args.page {
        Some(path) => Some(parse_page_config(&read_input(path)?)),
        None => None,
    };

    let raw = read_input(&args.block)?;
    let resolution = resolve_block(&raw, &presets, page.as_ref(), &settings);

    if args.json {
        let json = serde_json::to_string_pretty(&resolution.report()).map_err(|e| {
            CodefenceError::UserError(format!("failed to serialize resolution: {}", e))
        })?;
        println!("{}", json);
    } else {
        print_text(&resolution)?;
    }

    match resolution.content {
        Ok(_) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn print_text(resolution: &Resolution) -> Result<()> {
    let config = serde_yaml::to_string(&resolution.config).map_err(|e| {
        CodefenceError::UserError(format!("failed to serialize configuration: {}", e))
    })?;

    println!("================================================================================");
    println!("Configuration");
    println!("================================================================================");
    print!("{}", config);
    println!();

    println!("================================================================================");
    println!("Content");
    println!("================================================================================");
    match &resolution.content {
        Ok(_) if !resolution.has_body => println!("(no body, content comes from META.PATH)"),
        Ok(content) => println!("{}", content),
        Err(e) => println!("[filter error] {}", e),
    }

    if !resolution.annotations.is_empty() {
        println!();
        println!("================================================================================");
        println!("Annotations");
        println!("================================================================================");
        for annotation in &resolution.annotations {
            let lines: Vec<String> = annotation.lines.iter().map(|l| l.to_string()).collect();
            println!(
                "  [{}] {} ({}, {})",
                lines.join(","),
                annotation.text,
                annotation.mode,
                annotation.variant
            );
        }
    }

    Ok(())
}

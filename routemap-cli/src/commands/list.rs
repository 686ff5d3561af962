//! Implementation of the `routemap list` command.

use crate::colors;
use colored::Colorize;
use notify_debouncer_mini::{DebounceEventResult, new_debouncer, notify::RecursiveMode};
use routemap::introspection::RouteTable;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use super::{STDIN, load_table, print_skipped};

/// Configuration for the list command.
pub struct ListConfig {
    pub tree: String,
    pub watch: bool,
}

/// Execute the `list` command.
pub fn execute(config: ListConfig) -> Result<(), String> {
    if config.watch {
        if config.tree == STDIN {
            return Err("Watch mode needs a tree file, not stdin".to_string());
        }
        run_watch_mode(&config)
    } else {
        print_routes(&config.tree)
    }
}

fn print_routes(tree: &str) -> Result<(), String> {
    let table = load_table(tree)?;

    println!();
    print_table(&table);
    println!();
    print_summary(&table);

    Ok(())
}

fn print_table(table: &RouteTable) {
    if table.is_empty() {
        println!("  {}", "No routes registered.".custom_color(colors::subtext()));
        return;
    }

    let width = table
        .endpoints()
        .iter()
        .map(|e| e.methods.to_string().len())
        .max()
        .unwrap_or(0);

    for endpoint in table.endpoints() {
        let verbs: Vec<String> = endpoint
            .methods
            .iter()
            .map(|m| m.as_str().custom_color(colors::method(m)).bold().to_string())
            .collect();
        let padding = " ".repeat(width - endpoint.methods.to_string().len());

        let mut line = format!("  {}{}  {}", verbs.join(", "), padding, endpoint.path.bold());
        if !endpoint.handlers.is_empty() {
            line.push_str(&format!(
                "  {}",
                endpoint.handlers.join(", ").custom_color(colors::subtext())
            ));
        }
        println!("{}", line);
    }
}

fn print_summary(table: &RouteTable) {
    println!(
        "{} {} endpoint(s), {} route(s)",
        "INFO".custom_color(colors::blue()).bold(),
        table.len(),
        table.routes().len()
    );

    if !table.skipped().is_empty() {
        println!(
            "{} {} malformed layer(s) skipped:",
            "WARN".custom_color(colors::yellow()).bold(),
            table.skipped().len()
        );
        print_skipped(table);
    }
}

/// Re-list routes whenever the tree file changes.
fn run_watch_mode(config: &ListConfig) -> Result<(), String> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    println!();
    println!(
        "{} Watch mode enabled. Press Ctrl+C to stop.",
        "INFO".custom_color(colors::blue()).bold()
    );

    // Initial run
    if let Err(e) = print_routes(&config.tree) {
        eprintln!("{} {}", "Error:".red().bold(), e);
    }

    let tree = Path::new(&config.tree);
    let file_name = tree
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| format!("{} is not a file path", config.tree))?;
    // Editors often replace the file, so watch its directory instead.
    let dir = match tree.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(
        Duration::from_millis(300),
        move |res: DebounceEventResult| {
            if let Ok(events) = res {
                if events
                    .iter()
                    .any(|event| event.path.file_name() == Some(file_name.as_os_str()))
                {
                    let _ = tx.send(());
                }
            }
        },
    )
    .map_err(|e| format!("Failed to create file watcher: {}", e))?;

    debouncer
        .watcher()
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(|e| format!("Failed to watch {}: {}", dir.display(), e))?;

    println!(
        "{} Watching {} for changes...",
        "INFO".custom_color(colors::blue()).bold(),
        config.tree.custom_color(colors::sky())
    );

    while running.load(Ordering::SeqCst) {
        if rx.recv_timeout(Duration::from_millis(100)).is_ok() {
            println!();
            println!(
                "{} Change detected, re-reading routes...",
                "INFO".custom_color(colors::yellow()).bold()
            );

            if let Err(e) = print_routes(&config.tree) {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
    }

    println!();
    println!(
        "{} Stopped watching.",
        "INFO".custom_color(colors::blue()).bold()
    );

    Ok(())
}

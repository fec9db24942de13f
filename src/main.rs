// SPDX-License-Identifier: PMPL-1.0-or-later

//! map-localize: switch the label language of a map style
//!
//! Reads a style document, rewrites the text fields of streets-backed
//! symbol layers for the requested language and writes the result.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use map_localize::classify::supported_datasets;
use map_localize::config::LocalizationConfig;
use map_localize::locale::{Locale, LocaleRegistry};
use map_localize::plugin::classify_sources;
use map_localize::report::output::{save_report, ReportOutputFormat};
use map_localize::report::ReportFormatter;
use map_localize::style::{StyleDocument, StyleObserver};
use map_localize::types::Language;
use map_localize::LocalizationPlugin;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "map-localize")]
#[command(version)]
#[command(about = "Switch the label language of a map style")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a style's labels for a language or locale
    Localize {
        /// Style document (JSON)
        #[arg(value_name = "STYLE")]
        style: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Fall back to the first registered locale with the same language
        #[arg(long)]
        fallback: bool,

        /// Config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the localized style here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the localization report (JSON or YAML by extension)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Report format, overriding the extension
        #[arg(long, value_enum, requires = "report")]
        report_format: Option<ReportOutputFormat>,
    },

    /// List the supported languages
    Languages,

    /// List the registered locales in resolution order
    Locales {
        /// Config file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show how each source of a style is classified
    Sources {
        /// Style document (JSON)
        #[arg(value_name = "STYLE")]
        style: PathBuf,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct Selection {
    /// Language token, suffix or field (GERMAN, de, name_de)
    #[arg(short, long)]
    language: Option<String>,

    /// Platform locale (de-DE, zh-Hans-CN, pt_BR.UTF-8)
    #[arg(long)]
    locale: Option<String>,

    /// Use the operating system locale
    #[arg(long)]
    device: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Localize {
            style,
            selection,
            fallback,
            config,
            output,
            report,
            report_format,
        } => {
            let config = load_config(config.as_deref())?;
            let accept_fallback = fallback || config.accept_fallback;

            let mut plugin: LocalizationPlugin<StyleDocument> =
                LocalizationPlugin::with_registry(config.registry()?);
            plugin.on_style_changed(StyleDocument::load(&style)?);

            let apply_report = if let Some(language) = selection.language {
                let language = Language::parse(&language)
                    .ok_or_else(|| anyhow!("unknown language '{}'", language))?;
                plugin.set_language(language)
            } else if let Some(locale) = selection.locale {
                plugin.set_locale(&Locale::parse(&locale)?, accept_fallback)
            } else if selection.device {
                plugin.match_device_language(accept_fallback)
            } else if let Some(language) = config.default_language()? {
                plugin.set_language(language)
            } else {
                plugin.match_device_language(accept_fallback)
            };

            ReportFormatter::new()
                .verbose(cli.verbose)
                .print(&apply_report);

            let document = plugin
                .take_style()
                .ok_or_else(|| anyhow!("style was detached"))?;
            let json = document.to_string_pretty()?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    eprintln!("Style saved to: {}", path.display());
                }
                None => println!("{}", json),
            }

            if let Some(path) = report {
                save_report(&apply_report, &path, report_format)?;
                eprintln!("Report saved to: {}", path.display());
            }
        }

        Commands::Languages => {
            println!("{}", "LANGUAGES".bold().yellow());
            for language in Language::all() {
                println!(
                    "  {:<20} {:<8} {}",
                    language.token(),
                    language.suffix().unwrap_or("-"),
                    language.field_name()
                );
            }
        }

        Commands::Locales { config } => {
            let registry = load_config(config.as_deref())?.registry()?;
            print_registry(&registry);
        }

        Commands::Sources { style } => {
            let document = StyleDocument::load(&style)?;
            println!("{}", "SOURCES".bold().yellow());
            for (source, class) in classify_sources(&document) {
                let class = if class.is_supported() {
                    class.to_string().green()
                } else {
                    class.to_string().red()
                };
                println!(
                    "  {:<24} {:<12} {}",
                    source.id,
                    class,
                    source.url.as_deref().unwrap_or("-")
                );
            }
            println!("\nSupported datasets: {}", supported_datasets().join(", "));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LocalizationConfig> {
    match path {
        Some(path) => LocalizationConfig::load(path),
        None => Ok(LocalizationConfig::default()),
    }
}

fn print_registry(registry: &LocaleRegistry) {
    println!("{}", "LOCALES".bold().yellow());
    for (locale, map_locale) in registry.iter() {
        println!(
            "  {:<12} {:<20} {}",
            locale.to_string(),
            map_locale.language.token(),
            map_locale.language.field_name()
        );
    }
}

//! toolscout: report which language toolchains are installed on this machine

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::time::Duration;
use toolchain_scout::{
    ai_provider, ai_providers, default_registry, search_packages, tutorials, CommandRunner,
    ConfigStore, Dispatcher, LanguageConfig, PackageManager, ScanOptions, SystemInfo, ThemeConfig,
    LanguageReport, UiLanguage, DEFAULT_MAX_CONCURRENCY,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "toolscout")]
#[command(author, version, about = "Detect installed programming language toolchains", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe every known toolchain
    Scan {
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,

        /// Only show toolchains that were found
        #[arg(long)]
        installed_only: bool,

        /// Number of probes allowed to run at once
        #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
        concurrency: usize,

        /// Deadline in seconds for each external command
        #[arg(long, default_value_t = 5)]
        timeout: u64,
    },

    /// Search a package manager's registry
    Search {
        /// Package manager id (npm, pip, gem, cargo, ...)
        manager: PackageManager,

        /// Package name or keyword
        name: String,

        /// Deadline in seconds for the search command
        #[arg(long, default_value_t = 15)]
        timeout: u64,
    },

    /// Show package manager cheat sheets
    Tutorials,

    /// List the supported AI providers
    Providers,

    /// Show operating system, architecture and CPU count
    Info,

    /// Read or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print all settings
    Show,

    /// Set the interface language
    SetLanguage {
        /// One of zh, en, ru
        language: UiLanguage,
    },

    /// Set the color theme
    SetTheme { theme: String },

    /// Select an AI provider
    SetAi {
        /// Provider id, see `toolscout providers`
        provider: String,

        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            json,
            installed_only,
            concurrency,
            timeout,
        } => {
            let options = ScanOptions {
                command_timeout: Duration::from_secs(timeout),
                max_concurrency: concurrency,
            };
            scan(options, json, installed_only).await?;
        }
        Commands::Search {
            manager,
            name,
            timeout,
        } => {
            let runner = CommandRunner::new(Duration::from_secs(timeout));
            let packages = search_packages(manager, &name, &runner)
                .await
                .with_context(|| format!("{manager} search for '{name}' failed"))?;
            if packages.is_empty() {
                println!("No results.");
            }
            for pkg in packages {
                println!("{:<40} {:<16} {}", pkg.name, pkg.version, pkg.description);
                println!("    {}", pkg.install_link.replace('\n', "\n    "));
            }
        }
        Commands::Tutorials => {
            for t in tutorials() {
                println!("{}", t.name);
                println!("  install: {}", t.install_cmd);
                println!("  search:  {}", t.search_cmd);
                println!("  update:  {}", t.update_cmd);
                println!("  docs:    {}", t.tutorial_url);
            }
        }
        Commands::Providers => {
            for p in ai_providers() {
                println!("{:<14} {:<24} {}", p.id, p.name, p.endpoint_url);
            }
        }
        Commands::Info => {
            let info = SystemInfo::current();
            println!("os:   {}", info.os);
            println!("arch: {}", info.arch);
            println!("cpus: {}", info.cpus);
        }
        Commands::Config { action } => config(action)?,
    }

    Ok(())
}

async fn scan(options: ScanOptions, json: bool, installed_only: bool) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(default_registry(), options);
    let mut reports = dispatcher
        .detect_all_with_progress(|p| {
            tracing::info!(completed = p.completed, total = p.total, language = p.language, "probed");
        })
        .await;
    reports.sort_by_name();

    let reports: Vec<_> = reports
        .into_iter()
        .filter(|r| !installed_only || r.installed)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_table(&reports);
    Ok(())
}

fn print_table(reports: &[LanguageReport]) {
    println!("{:<16} {:<10} {:<40} {}", "LANGUAGE", "STATUS", "VERSION", "MISSING");
    for r in reports {
        let status = if r.installed { "installed" } else { "-" };
        let version: String = r.version.chars().take(40).collect();
        println!(
            "{:<16} {:<10} {:<40} {}",
            r.name,
            status,
            version,
            r.missing_deps.join(", ")
        );
    }
    let installed = reports.iter().filter(|r| r.installed).count();
    println!("\n{installed} of {} toolchains installed", reports.len());
}

fn config(action: ConfigAction) -> anyhow::Result<()> {
    let store = ConfigStore::default_location()?;

    match action {
        ConfigAction::Show => {
            let settings = serde_json::json!({
                "directory": store.dir(),
                "language": store.load_language(),
                "theme": store.load_theme(),
                "ai": store.load_ai().redacted(),
            });
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::SetLanguage { language } => {
            store.save_language(&LanguageConfig { language })?;
            println!("language set to {language}");
        }
        ConfigAction::SetTheme { theme } => {
            store.save_theme(&ThemeConfig { theme })?;
            println!("theme saved");
        }
        ConfigAction::SetAi {
            provider,
            api_key,
            endpoint,
        } => {
            if ai_provider(&provider).is_none() {
                anyhow::bail!("unknown AI provider '{provider}', see `toolscout providers`");
            }
            let mut ai = store.load_ai();
            ai.selected_provider_id = provider;
            if let Some(key) = api_key {
                ai.api_key = key;
            }
            if let Some(url) = endpoint {
                ai.custom_endpoint = url;
            }
            store.save_ai(&ai)?;
            println!("AI provider set to {}", ai.selected_provider_id);
        }
    }
    Ok(())
}

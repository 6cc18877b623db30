use clap::{Parser, Subcommand};
use polysite::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polysite")]
#[command(about = "Static site generator for multilingual websites")]
#[command(long_about = "\
Static site generator for multilingual websites

One JSON dictionary per language, one HTML template per page. Every
(language, page) pair is rendered to its own index.html, assets are copied
site-wide and per language, and the site root gets a language-detection
redirect page.

Source structure:

  site/
  ├── config.toml              # Site config (optional)
  ├── pages/                   # One MiniJinja template per page
  │   ├── index.html           # Becomes <code>/index.html
  │   └── about.html           # Becomes <code>/about/index.html
  ├── translations/            # One dictionary per language
  │   ├── en.json              # File stem = language code
  │   └── fr.json
  └── assets/                  # Copied verbatim (optional)

Templates see the language's dictionary plus three derived keys: lang,
alternates (one {lang, url} per language) and canonical. Derived keys win
on name collision.

The base URL for canonical and alternate links comes from --base-url, the
SITE_URL environment variable, or config.toml, in that order; unset means
root-relative URLs.

Run 'polysite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Absolute site base URL (overrides SITE_URL and config.toml)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: render every language, copy assets, swap into place
    Build,
    /// Validate source inputs without writing any output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let base_url = config::resolve_base_url(
                cli.base_url.as_deref(),
                std::env::var("SITE_URL").ok().as_deref(),
                &site_config,
            );
            let summary = generate::generate(
                &cli.source,
                &cli.output,
                &base_url,
                &site_config.default_language,
            )?;
            output::print_build_output(&summary);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let report = generate::check(&cli.source, &site_config.default_language)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

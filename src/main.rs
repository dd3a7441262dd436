use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;
use std::process;

mod detect;
mod error;
mod fetch;
mod output;
mod render;

use detect::Source;
use error::Error;
use fetch::RemoteFetcher;
use output::Output;
use render::ramp::{GlyphRamp, DEFAULT_RAMP};
use render::{Filter, RenderOptions};

/// goski - images as ASCII art, right in your terminal
#[derive(Parser, Debug)]
#[command(name = "goski", version, about, long_about = None)]
struct Cli {
    /// Path to the image (or its URL, with -r)
    #[arg(short = 'i', long = "img", value_name = "PATH")]
    img: Option<String>,

    /// Output colored ASCII art
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Scale the output to fit in your terminal
    #[arg(short = 's', long = "scale", value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    scale: bool,

    /// Allow the image to be fetched from a URL
    #[arg(short = 'r', long = "remote")]
    remote: bool,

    /// Resampling filter used when scaling
    #[arg(long = "filter", value_enum, default_value_t = Filter::CatmullRom)]
    filter: Filter,

    /// Glyphs from lightest to darkest
    #[arg(long = "ramp", default_value = DEFAULT_RAMP)]
    ramp: String,

    /// Where fetched images are saved [default: system temp dir]
    #[arg(long = "cache-dir", value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Hide the download spinner
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let Some(target) = image_target(&cli) else {
        let _ = Cli::command().print_help();
        process::exit(2);
    };

    if let Err(e) = run(&cli, target).await {
        log::error!("{}", e);
        process::exit(1);
    }
}

/// The `-i` value, treating an empty string the same as a missing flag.
fn image_target(cli: &Cli) -> Option<&str> {
    cli.img.as_deref().filter(|s| !s.is_empty())
}

async fn run(cli: &Cli, target: &str) -> Result<(), Error> {
    let opts = RenderOptions {
        color: cli.color,
        autoscale: cli.scale,
        filter: cli.filter,
        ramp: GlyphRamp::new(&cli.ramp)?,
    };

    let path = match detect::classify(target) {
        Source::Local(path) => path,
        Source::Remote(_) if !cli.remote => return Err(Error::RemoteNotAllowed),
        Source::Remote(url) => {
            let cache_dir = cli.cache_dir.clone().unwrap_or_else(std::env::temp_dir);
            let mut fetcher = RemoteFetcher::new(cache_dir)?;
            if cli.quiet {
                fetcher = fetcher.with_spinner(false);
            }
            log::info!("fetching {} into {}", url, fetcher.cache_dir().display());
            fetcher.fetch(&url).await?
        }
    };

    let out = Output::new();
    let doc = render::render_file(&path, &opts, &out)?;
    out.emit(&doc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("goski").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&["-i", "cat.png"]);
        assert_eq!(cli.img.as_deref(), Some("cat.png"));
        assert!(!cli.color);
        assert!(cli.scale);
        assert!(!cli.remote);
        assert_eq!(cli.filter, Filter::CatmullRom);
        assert_eq!(cli.ramp, DEFAULT_RAMP);
        assert!(cli.cache_dir.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_flags() {
        let cli = parse(&[
            "--img",
            "https://example.com/cat.png",
            "-c",
            "-s",
            "false",
            "-r",
            "--filter",
            "lanczos3",
            "--ramp",
            " .#",
            "--cache-dir",
            "/tmp/goski",
            "-q",
        ]);
        assert!(cli.color);
        assert!(!cli.scale);
        assert!(cli.remote);
        assert_eq!(cli.filter, Filter::Lanczos3);
        assert_eq!(cli.ramp, " .#");
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/goski")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_without_image_parses() {
        let cli = parse(&[]);
        assert!(cli.img.is_none());
        assert_eq!(image_target(&cli), None);
    }

    #[test]
    fn test_empty_image_is_missing() {
        let cli = parse(&["-i", ""]);
        assert_eq!(cli.img.as_deref(), Some(""));
        assert_eq!(image_target(&cli), None);

        let cli = parse(&["-i", "cat.png"]);
        assert_eq!(image_target(&cli), Some("cat.png"));
    }

    #[tokio::test]
    async fn test_run_rejects_url_without_remote_flag() {
        let cli = parse(&["-i", "https://example.com/cat.png"]);
        let err = run(&cli, "https://example.com/cat.png").await.unwrap_err();
        assert!(matches!(err, Error::RemoteNotAllowed));
    }

    #[tokio::test]
    async fn test_run_rejects_short_ramp() {
        let cli = parse(&["-i", "cat.png", "--ramp", "#"]);
        let err = run(&cli, "cat.png").await.unwrap_err();
        assert!(matches!(err, Error::InvalidRamp { len: 1 }));
    }

    #[tokio::test]
    async fn test_run_missing_local_file() {
        let cli = parse(&["-i", "/no/such/goski/image.png"]);
        let err = run(&cli, "/no/such/goski/image.png").await.unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}

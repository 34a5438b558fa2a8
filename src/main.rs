use anyhow::{Context, Result};
use clap::Parser;
use round_icons::{
    config::DEFAULT_RES_DIR, generate_round_icons, FailurePolicy, IconError, RoundIconConfig,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "round-icons",
    about = "Generate round Android launcher icons for every density bucket"
)]
struct Args {
    /// Android resource directory holding the mipmap-* folders.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_RES_DIR)]
    res_dir: PathBuf,

    /// Source image. Defaults to mipmap-xxxhdpi/ic_launcher.png inside the resource directory.
    #[clap(short, long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Keep generating the remaining icons when one of them fails
    #[clap(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = RoundIconConfig::android(&args.res_dir);
    if let Some(source) = args.source {
        config = config.with_source(source);
    }

    let policy = if args.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::Halt
    };

    let report = match generate_round_icons(&config, policy) {
        // Already reported on stdout by the source check.
        Err(IconError::MissingSource { .. }) => std::process::exit(1),
        result => result.context("Failed to generate round icons")?,
    };

    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} round icons could not be generated",
            report.failed.len(),
            config.icons.len()
        );
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = std::env::var("ROUND_ICONS_LOG").unwrap_or_else(|_| "warn".into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

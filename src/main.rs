use anyhow::Result;
use clap::{ArgAction, Parser};
use log::error;

use release_notes::cli::NotesCmd;
use release_notes::config::{load_settings, NotesConfig};

#[derive(clap::Parser)]
#[command(
    name = "release-notes",
    about = "Generate release notes from the pull requests merged between two refs"
)]
struct Args {
    #[arg(
        long,
        help = "The repo to run the tool from [default: kubernetes-sigs/cluster-api]"
    )]
    repository: Option<String>,

    #[arg(
        long,
        help = "The tag or commit to start from, formatted as heads/<branch name> or \
                tags/<tag name>. Computed from --release if not set"
    )]
    from: Option<String>,

    #[arg(
        long,
        help = "The ref to stop at, formatted as heads/<branch name> or tags/<tag name>. \
                Defaults to the branch"
    )]
    to: Option<String>,

    #[arg(
        long,
        help = "The branch to generate the notes from. Computed from --release if not set"
    )]
    branch: Option<String>,

    #[arg(long, help = "The tag for the new release")]
    release: Option<String>,

    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Prefix each entry with its area label"
    )]
    prefix_area_label: bool,

    #[arg(
        long,
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Add a pre-release warning header"
    )]
    pre_release_version: bool,

    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Add a templated deprecation warning header"
    )]
    deprecation: bool,

    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Add the Kubernetes version support header"
    )]
    add_kubernetes_version_support: bool,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log every gh call")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(document) => print!("{}", document),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String> {
    let settings = load_settings(args.config.as_deref())?;

    let config = NotesConfig {
        from_ref: args.from,
        to_ref: args.to,
        new_tag: args.release,
        branch: args.branch,
        prefix_area_label: args.prefix_area_label,
        pre_release_version: args.pre_release_version,
        deprecation: args.deprecation,
        add_kubernetes_version_support: args.add_kubernetes_version_support,
        ..NotesConfig::default()
    }
    .with_settings(args.repository, settings);

    Ok(NotesCmd::new(config).run()?)
}

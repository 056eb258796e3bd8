// SPDX-License-Identifier: MPL-2.0
use iced_swipe::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_swipe [OPTIONS] [DECK.toml]

Options:
  --lang <ID>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let deck_path = args.opt_free_from_str::<PathBuf>()?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring extra arguments");
    }

    Ok(Some(Flags {
        lang,
        config_dir,
        deck_path,
    }))
}

fn main() -> iced::Result {
    // Set RUST_LOG to control the log level, e.g. RUST_LOG=iced_swipe=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}

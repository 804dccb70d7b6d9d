// SPDX-License-Identifier: MPL-2.0
use iced_feedback::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_feedback demo

USAGE:
  iced_feedback [OPTIONS]

OPTIONS:
  -h, --help              Print help information
  --lang <LOCALE>         Use a specific locale (e.g., en-US, id, fr)
  --config-dir <PATH>     Read settings.toml from PATH

ENVIRONMENT:
  ICED_FEEDBACK_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                  Log filter (e.g., iced_feedback=debug)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    iced_feedback::logging::init(tracing::Level::INFO);

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

// SPDX-License-Identifier: MPL-2.0
use clinic_brochure::app::{self, paths, Flags};
use clinic_brochure::logging;
use clinic_brochure::ui::theming::ThemePreference;

const HELP: &str = "\
Usage: clinic_brochure [OPTIONS]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, bn)
  --theme <THEME>        light, dark or system
  --config-dir <PATH>    Directory containing settings.toml
  -h, --help             Print this help

Environment:
  CLINIC_BROCHURE_CONFIG_DIR    Same as --config-dir
  RUST_LOG                      Log filter (default: info)
";

fn parse_theme(raw: &str) -> Result<ThemePreference, &'static str> {
    ThemePreference::parse(raw).ok_or("expected light, dark or system")
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let logging_failed = match logging::init_logging() {
        Ok(()) => false,
        Err(err) => {
            eprintln!("{err}");
            true
        }
    };

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --lang");
        None
    });
    let theme = args
        .opt_value_from_fn("--theme", parse_theme)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --theme");
            None
        });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --config-dir");
        None
    });

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unexpected argument");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        theme,
        logging_failed,
    })
}

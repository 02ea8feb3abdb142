// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use svgcleaner::app::{self, Flags};

const HELP: &str = "\
svgcleaner - clean up your SVG files from unnecessary data

USAGE:
    svgcleaner [OPTIONS]

OPTIONS:
    --lang <LOCALE>            Interface language (e.g. fr, pt_BR)
    --translations-dir <DIR>   Directory holding translation files
    --config-dir <DIR>         Directory holding settings.toml
    -h, --help                 Print this help

ENVIRONMENT:
    SVGCLEANER_TRANSLATIONS_DIR, SVGCLEANER_CONFIG_DIR, RUST_LOG
";

/// Exit status for invalid command-line usage.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    app::init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(e) => {
            log::error!("{e}");
            eprint!("{HELP}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // Iced takes no process arguments.
    for arg in &flags.args {
        log::warn!("Ignoring argument {arg:?}");
    }

    ExitCode::from(app::run(flags))
}

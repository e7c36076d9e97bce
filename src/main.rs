// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, paths, Flags};
use folio::logging;
use std::path::PathBuf;

const HELP: &str = "\
folio - portfolio gallery

USAGE:
  folio [OPTIONS]

OPTIONS:
  --lang <id>            Interface language (e.g. en-US, fr)
  --content <file>       Portfolio content file (TOML)
  --config-dir <dir>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  FOLIO_CONFIG_DIR       Settings directory (overridden by --config-dir)
  FOLIO_LOG              Log filter, e.g. `folio=debug`
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("folio: invalid --lang: {err}");
        None
    });
    let content_path: Option<PathBuf> =
        args.opt_value_from_str("--content").unwrap_or_else(|err| {
            eprintln!("folio: invalid --content: {err}");
            None
        });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("folio: invalid --config-dir: {err}");
            None
        });

    let unused = args.finish();
    if !unused.is_empty() {
        eprintln!("folio: ignoring unexpected arguments: {unused:?}");
    }

    logging::init();
    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, content_path })
}

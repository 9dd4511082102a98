const HELP: &str = "\
cargo xtask

USAGE:
  cargo xtask [OPTIONS] [TASK]

FLAGS:
  -h, --help      Prints help information
  -v, --verbose   Prints additional execution traces

TASKS:
  check fmt               Check formatting
  check lints             Check lints
  check tests [--no-run]  Compile tests and, unless specified otherwise, run them
  ci                      Run all checks required on CI
  clean                   Clean workspace
  wasm check              Ensure the flare-web module links without undefined symbols
  wasm install            Install dependencies required to build the WASM target
";

pub(crate) fn print_help() {
    println!("{HELP}");
}

pub(crate) struct Args {
    pub(crate) verbose: bool,
    pub(crate) action: Action,
}

pub(crate) enum Action {
    ShowHelp,
    CheckFmt,
    CheckLints,
    CheckTests { no_run: bool },
    Ci,
    Clean,
    WasmCheck,
    WasmInstall,
}

pub(crate) fn parse_args() -> anyhow::Result<Args> {
    let mut args = pico_args::Arguments::from_env();

    let action = if args.contains(["-h", "--help"]) {
        Action::ShowHelp
    } else {
        match args.subcommand()?.as_deref() {
            Some("check") => match args.subcommand()?.as_deref() {
                Some("fmt") => Action::CheckFmt,
                Some("lints") => Action::CheckLints,
                Some("tests") => Action::CheckTests {
                    no_run: args.contains("--no-run"),
                },
                Some(unknown) => anyhow::bail!("unknown check action: {unknown}"),
                None => Action::ShowHelp,
            },
            Some("ci") => Action::Ci,
            Some("clean") => Action::Clean,
            Some("wasm") => match args.subcommand()?.as_deref() {
                Some("check") => Action::WasmCheck,
                Some("install") => Action::WasmInstall,
                Some(unknown) => anyhow::bail!("unknown wasm action: {unknown}"),
                None => Action::ShowHelp,
            },
            None | Some(_) => Action::ShowHelp,
        }
    };

    let verbose = args.contains(["-v", "--verbose"]);

    Ok(Args { verbose, action })
}

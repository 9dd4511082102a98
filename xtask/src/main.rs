#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]
#![allow(clippy::unwrap_used)]

mod check;
mod clean;
mod cli;
mod prelude;
mod section;
mod wasm;

use std::path::{Path, PathBuf};

use xshell::Shell;

use crate::cli::Action;

const CARGO: &str = env!("CARGO");
const WASM_PACKAGES: &[&str] = &["flare-web"];

fn main() -> anyhow::Result<()> {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            cli::print_help();
            return Err(e);
        }
    };

    let sh = Shell::new()?;

    sh.change_dir(project_root());

    if args.verbose {
        sh.set_var("CARGO_TERM_VERBOSE", "true");
    }

    match args.action {
        Action::ShowHelp => cli::print_help(),
        Action::CheckFmt => check::fmt(&sh)?,
        Action::CheckLints => check::lints(&sh)?,
        Action::CheckTests { no_run } => check::tests(&sh, no_run)?,
        Action::Ci => {
            check::fmt(&sh)?;
            check::tests(&sh, false)?;
            check::lints(&sh)?;
            wasm::check(&sh)?;
        }
        Action::Clean => clean::workspace(&sh)?,
        Action::WasmCheck => wasm::check(&sh)?,
        Action::WasmInstall => wasm::install(&sh)?,
    }

    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}

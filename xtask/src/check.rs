use crate::prelude::*;

pub(crate) fn fmt(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("FORMATTING");

    let output = cmd!(sh, "{CARGO} fmt --all -- --check").ignore_status().output()?;

    if !output.status.success() {
        anyhow::bail!("Bad formatting, please run 'cargo +stable fmt --all'");
    }

    println!("All good!");

    Ok(())
}

pub(crate) fn lints(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("LINTS");

    cmd!(sh, "{CARGO} clippy --workspace --all-targets --locked -- -D warnings").run()?;

    println!("All good!");

    Ok(())
}

pub(crate) fn tests(sh: &Shell, no_run: bool) -> anyhow::Result<()> {
    let _s = Section::new("TESTS");

    let no_run = no_run.then_some("--no-run");

    cmd!(sh, "{CARGO} test --workspace --locked {no_run...}").run()?;

    println!("All good!");

    Ok(())
}

use crate::prelude::*;

/// JS entry points `flare-web` must export, by their `js_name`.
const EXPECTED_EXPORTS: &[&str] = &[
    "flareInit",
    "flareSetSurfacePrefix",
    "rendererCreate",
    "rendererDestroy",
    "rendererClear",
    "rendererDrawRectangle",
    "rendererDrawCircle",
    "rendererResize",
    "rendererIsBound",
    "rendererWidth",
    "rendererHeight",
    "flareReleaseSurface",
    "flareTeardown",
];

pub(crate) fn check(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("WASM-CHECK");

    for package in WASM_PACKAGES {
        println!("Check {package}");

        cmd!(
            sh,
            "{CARGO} rustc --locked --target wasm32-unknown-unknown --package {package} --lib --crate-type cdylib"
        )
        .run()?;

        let artifact_name = format!("{}.wasm", package.replace('-', "_"));
        let output = cmd!(sh, "wasm2wat ./target/wasm32-unknown-unknown/debug/{artifact_name}").output()?;
        let wat = core::str::from_utf8(&output.stdout).context("wasm2wat output is not valid UTF-8")?;

        check_module(wat).with_context(|| format!("{package} failed the module check"))?;
    }

    println!("All good!");

    Ok(())
}

pub(crate) fn install(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("WASM-INSTALL");

    cmd!(sh, "rustup target add wasm32-unknown-unknown").run()?;

    Ok(())
}

// The module may only import wasm-bindgen glue, and every entry point must be exported.
fn check_module(wat: &str) -> anyhow::Result<()> {
    if wat.contains("(import \"env\"") {
        anyhow::bail!("found undefined `env` symbols in generated wasm file");
    }

    let missing: Vec<&str> = EXPECTED_EXPORTS
        .iter()
        .copied()
        .filter(|name| !wat.contains(&format!("(export \"{name}\"")))
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("missing exports: {}", missing.join(", "));
    }

    println!("{} exports present", EXPECTED_EXPORTS.len());

    Ok(())
}

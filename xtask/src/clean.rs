use crate::prelude::*;

pub(crate) fn workspace(sh: &Shell) -> anyhow::Result<()> {
    let _s = Section::new("CLEAN");
    cmd!(sh, "{CARGO} clean").run()?;
    Ok(())
}

pub(crate) use anyhow::Context as _;
pub(crate) use xshell::{cmd, Shell};

pub(crate) use crate::section::Section;
pub(crate) use crate::{CARGO, WASM_PACKAGES};

use std::io::{self, Write as _};
use std::time::Instant;

/// Timed block of xtask output, folded into a log group on GitHub Actions.
pub(crate) struct Section {
    name: &'static str,
    start: Instant,
    grouped: bool,
}

impl Section {
    pub(crate) fn new(name: &'static str) -> Self {
        let grouped = std::env::var_os("GITHUB_ACTIONS").is_some();

        flush_all();
        if grouped {
            eprintln!("::group::{name}");
        } else {
            eprintln!("==> {name}");
        }

        Self {
            name,
            start: Instant::now(),
            grouped,
        }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        flush_all();

        let outcome = if std::thread::panicking() { "aborted" } else { "done" };
        eprintln!("{} {outcome} in {:.2?}", self.name, self.start.elapsed());

        if self.grouped {
            eprintln!("::endgroup::");
        }
    }
}

fn flush_all() {
    for result in [io::stdout().flush(), io::stderr().flush()] {
        if let Err(err) = result {
            eprintln!("flush error: {err}");
        }
    }
}

//! `htmlfetch` / `htmlfetch fetch` – the interactive session on stdin/stdout.

use anyhow::Result;
use htmlfetch_core::config::FetchConfig;
use htmlfetch_core::fetch::CurlFetcher;
use htmlfetch_core::prompt::Console;
use htmlfetch_core::session::Session;
use std::io;

pub fn run_session(cfg: FetchConfig) -> Result<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(CurlFetcher::new(cfg), console);
    session.run()
}

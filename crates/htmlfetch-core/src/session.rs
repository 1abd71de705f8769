//! The interactive loop: collect, fetch, present, offer save, repeat.

use crate::fetch::{Fetcher, Page};
use crate::present::{present_failure, present_page};
use crate::prompt::{Console, YES_NO_HINT};
use crate::request::RequestParameters;
use crate::save::{write_body, SaveDecision};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome! This tool will help you fetch HTML code from a website.";
pub const FAREWELL: &str = "\nExiting. Goodbye!";
pub const CONTINUE_QUESTION: &str = "\nDo you want to fetch another URL? (yes/no)";

/// One interactive session over a fetcher and a console.
///
/// Fetch failures and failed saves are reported and the loop goes on. Only a
/// console I/O error (including end of input) ends `run` with an error.
pub struct Session<F, R, W> {
    fetcher: F,
    console: Console<R, W>,
}

impl<F, R, W> Session<F, R, W>
where
    F: Fetcher,
    R: BufRead,
    W: Write,
{
    pub fn new(fetcher: F, console: Console<R, W>) -> Self {
        Self { fetcher, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user answers `no` to fetching another URL.
    pub fn run(&mut self) -> Result<()> {
        self.console.say(WELCOME)?;
        let mut iteration = 0u64;
        loop {
            iteration += 1;
            tracing::debug!(iteration, "session iteration");
            self.run_once()?;
            if !self.console.ask_yes_no(CONTINUE_QUESTION, YES_NO_HINT)? {
                self.console.say(FAREWELL)?;
                tracing::info!(iterations = iteration, "session finished");
                return Ok(());
            }
        }
    }

    /// One collect → fetch → present → save cycle.
    pub fn run_once(&mut self) -> Result<()> {
        let params = self.console.collect_parameters()?;
        match self.fetcher.fetch(&params) {
            Ok(page) => {
                present_page(self.console.output(), &params.url, &page)
                    .context("write page to console")?;
                self.offer_save(&params, &page)
            }
            Err(err) => {
                present_failure(self.console.output(), &err)
                    .context("write failure to console")?;
                Ok(())
            }
        }
    }

    fn offer_save(&mut self, params: &RequestParameters, page: &Page) -> Result<()> {
        let path = match self.console.collect_save_decision()? {
            SaveDecision::Skip => return Ok(()),
            SaveDecision::Save(path) => path,
        };
        match write_body(&path, &page.body) {
            Ok(()) => self
                .console
                .say(&format!("\nHTML content saved to {}.", path.display())),
            Err(err) => {
                tracing::warn!(url = %params.url, "save failed: {:#}", err);
                self.console
                    .say(&format!("\nCould not save the file: {err:#}"))
            }
        }
    }
}

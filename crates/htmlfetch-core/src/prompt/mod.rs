//! Line-oriented prompts over any reader/writer pair.
//!
//! Every question repeats until the answer is valid; there is no attempt
//! limit. The only way out of a prompt besides a valid answer is an I/O
//! error, including end of input.

mod validate;

pub use validate::{
    parse_timeout, parse_yes_no, validate_url, TimeoutRejection, UrlRejection, URL_SCHEMES,
};

use crate::request::RequestParameters;
use crate::save::{html_path, SaveDecision};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub const YES_NO_HINT: &str = "Invalid input. Please enter 'yes' or 'no'.";

/// Interactive console. Generic so tests can script input and capture output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print one line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("write to console")?;
        Ok(())
    }

    /// Print `prompt` on its own line and read one trimmed answer.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such an answer fails
    /// validation and is asked again.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}").context("write to console")?;
        self.output.flush().context("flush console")?;

        let mut line = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut line)
            .context("read from console")?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
                .context("read from console");
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask until the answer is `yes` or `no`, printing `invalid` after anything else.
    pub fn ask_yes_no(&mut self, question: &str, invalid: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question)?;
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            self.say(invalid)?;
        }
    }

    pub fn collect_url(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Enter the website link (e.g., https://example.com):")?;
            match validate_url(&answer) {
                Ok(url) => return Ok(url.to_string()),
                Err(rejection) => self.say(&rejection.to_string())?,
            }
        }
    }

    pub fn collect_redirect_policy(&mut self) -> Result<bool> {
        self.ask_yes_no(
            "Do you want to allow redirects? (yes/no)",
            "Invalid answer for redirects. Please enter 'yes' or 'no'.",
        )
    }

    pub fn collect_timeout(&mut self) -> Result<u64> {
        loop {
            let answer = self.ask("Set timeout value (in seconds):")?;
            match parse_timeout(&answer) {
                Ok(secs) => return Ok(secs),
                Err(rejection) => self.say(&rejection.to_string())?,
            }
        }
    }

    /// URL, then redirect policy, then timeout.
    pub fn collect_parameters(&mut self) -> Result<RequestParameters> {
        let url = self.collect_url()?;
        let allow_redirects = self.collect_redirect_policy()?;
        let timeout_secs = self.collect_timeout()?;
        Ok(RequestParameters {
            url,
            allow_redirects,
            timeout_secs,
        })
    }

    /// Ask whether to save and, if so, where.
    ///
    /// An existing target needs an explicit `yes`; `no` asks for another
    /// name, anything else repeats the overwrite question for the same file.
    pub fn collect_save_decision(&mut self) -> Result<SaveDecision> {
        let save = self.ask_yes_no(
            "\nDo you want to save the HTML content as a file? (yes/no)",
            YES_NO_HINT,
        )?;
        if !save {
            return Ok(SaveDecision::Skip);
        }

        self.say(
            "\nBy default, the file will be saved in the current working directory.\n\
             You can also specify an absolute file path.\n",
        )?;

        loop {
            let base = self.ask("Enter the file name:")?;
            if base.is_empty() {
                self.say("The file name cannot be empty.")?;
                continue;
            }
            let path = html_path(&base);
            if !path.exists() {
                return Ok(SaveDecision::Save(path));
            }
            let question = format!(
                "The file '{}' already exists. Do you want to overwrite it? (yes/no)",
                path.display()
            );
            if self.ask_yes_no(&question, YES_NO_HINT)? {
                return Ok(SaveDecision::Save(path));
            }
            self.say("Please enter a different file name.")?;
        }
    }
}

//! Interactive collection of variable and port values.
//!
//! Every question accepts a blank answer: it selects the default, or "yes"
//! for confirmations. A failed read counts as a blank answer. Only an
//! interrupt ([`Error::Interrupted`]) stops the collection.

use std::{
    borrow::Cow,
    io::{BufRead, IsTerminal, Write},
};

use crate::{
    catalog::{Port, Variable},
    error::{Error, Result},
    values::Values,
};

const RULE_WIDTH: usize = 60;
const MASK: &str = "****";

/// Line based terminal the collector talks through.
pub trait Console {
    fn say(&mut self, line: &str);

    /// Reads one answer. Unreadable input is returned as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if the user aborted the prompt.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// [`Console`] over any reader/writer pair.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        let _ = write!(self.output, "{prompt} ");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => Ok(line),
            Err(e) => {
                crate::trace!("Failed to read answer: {e}");
                Ok(String::new())
            }
        }
    }
}

/// The process' own stdin/stdout. Uses `inquire` when stdin is a terminal.
pub struct Terminal;

impl Console for Terminal {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !std::io::stdin().is_terminal() {
            return LineConsole::new(std::io::stdin().lock(), std::io::stdout()).ask(prompt);
        }

        match inquire::Text::new(prompt).prompt() {
            Ok(answer) => Ok(answer),
            Err(inquire::InquireError::OperationInterrupted) => Err(Error::Interrupted),
            Err(e) => {
                crate::trace!("Prompt failed: {e}");
                Ok(String::new())
            }
        }
    }
}

#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Hides most of the value of password and secret keys.
#[must_use]
pub fn mask<'v>(key: &str, value: &'v str) -> Cow<'v, str> {
    let key = key.to_lowercase();
    if !(key.contains("password") || key.contains("secret")) {
        return Cow::Borrowed(value);
    }

    let len = value.chars().count();
    if len > 4 {
        let head = value.chars().take(2).collect::<String>();
        let tail = value.chars().skip(len - 2).collect::<String>();
        Cow::Owned(format!("{head}{MASK}{tail}"))
    } else {
        Cow::Borrowed(MASK)
    }
}

fn collect<'a>(
    console: &mut impl Console,
    title: &str,
    label: &str,
    slots: impl ExactSizeIterator<Item = (&'a str, &'a str, &'a str)>,
) -> Result<Values> {
    let mut values = Values::default();
    let total = slots.len();
    if total == 0 {
        return Ok(values);
    }

    console.say("");
    console.say(&crate::header!("{title}"));
    console.say("Press Enter to use default values");
    console.say(&"-".repeat(RULE_WIDTH));

    for (i, (key, description, default)) in slots.enumerate() {
        console.say("");
        console.say(&format!("[{}/{total}] {description}", i + 1));
        console.say(&format!("      Default: {default}"));

        let answer = console.ask(&format!("      {label}:"))?;
        let answer = answer.trim();

        values.insert(key, if answer.is_empty() { default } else { answer });
    }

    console.say(&"-".repeat(RULE_WIDTH));
    Ok(values)
}

/// # Errors
///
/// Returns [`Error::Interrupted`] if the user aborted a prompt.
pub fn collect_variables(console: &mut impl Console, declared: &[Variable]) -> Result<Values> {
    collect(
        console,
        "Environment Variables Configuration",
        "Enter value",
        declared.iter().map(|v| (v.name, v.description, v.default)),
    )
}

/// # Errors
///
/// Returns [`Error::Interrupted`] if the user aborted a prompt.
pub fn collect_ports(console: &mut impl Console, declared: &[Port]) -> Result<Values> {
    collect(
        console,
        "Port Configuration",
        "Enter port",
        declared.iter().map(|p| (p.service, p.description, p.default)),
    )
}

/// Shows the collected values and asks to go on. Nothing to confirm means yes.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] if the user aborted the prompt.
pub fn confirm(console: &mut impl Console, variables: &Values, ports: &Values) -> Result<bool> {
    if variables.is_empty() && ports.is_empty() {
        return Ok(true);
    }

    console.say("");
    console.say(&crate::header!("Configuration Summary"));

    if !variables.is_empty() {
        console.say("");
        console.say("Environment Variables:");
        for (key, value) in variables.iter() {
            console.say(&format!("      {key}: {}", mask(key, value)));
        }
    }

    if !ports.is_empty() {
        console.say("");
        console.say("Ports:");
        for (service, port) in ports.iter() {
            console.say(&format!("  {service}: {port}"));
        }
    }

    console.say("");
    Ok(is_affirmative(&console.ask("Confirm configuration? (Y/n):")?))
}

/// # Errors
///
/// Returns [`Error::Interrupted`] if the user aborted the prompt.
pub fn confirm_auto_start(console: &mut impl Console) -> Result<bool> {
    console.say("");
    Ok(is_affirmative(&console.ask("Auto-start the stack after creation? (Y/n):")?))
}

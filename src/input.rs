//! Prompt primitives: read-until-valid field input.
//!
//! Interactive sessions go through `dialoguer`; piped stdin falls back to the
//! plain `read_*` readers so the tool stays scriptable. Both paths share the
//! same parsers, so a malformed value is rejected identically either way.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};

use crate::model;
use crate::ui;

/// True when stdin is attached to a terminal.
pub fn interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Prompt for a field until `parse` accepts the entered value.
pub fn field<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    if interactive() {
        loop {
            let raw: String = dialoguer::Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => reject(&err),
            }
        }
    } else {
        read_field(&mut io::stdin().lock(), prompt, parse)
    }
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str) -> Result<bool> {
    if interactive() {
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()?)
    } else {
        read_confirm(&mut io::stdin().lock(), prompt)
    }
}

/// Prompt for a menu selection between 1 and `max`.
pub fn menu_choice(max: u32) -> Result<u32> {
    field("Please make your choice", move |s| parse_choice(s, max))
}

/// Non-negative integer field (IDs, ages, counts).
pub fn id(prompt: &str) -> Result<i32> {
    field(prompt, parse_id)
}

/// Bounded free-text field.
pub fn text(prompt: &str, limit: usize) -> Result<String> {
    field(prompt, move |s| model::validate_text(s, limit))
}

fn reject(err: &anyhow::Error) {
    println!(
        "{}",
        ui::colors::warning(&format!("Invalid input: {}", err))
    );
}

fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Plain-path version of [`field`], generic over the input source.
pub fn read_field<R, T, F>(reader: &mut R, prompt: &str, parse: F) -> Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let line = prompt_line(reader, prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => reject(&err),
        }
    }
}

/// Plain-path yes/no question; anything but y/yes/n/no re-prompts.
pub fn read_confirm<R: BufRead>(reader: &mut R, prompt: &str) -> Result<bool> {
    let question = format!("{} (y/n)", prompt);
    loop {
        match prompt_line(reader, &question)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", ui::colors::warning("Please answer y or n.")),
        }
    }
}

/// Parse a menu selection in `1..=max`.
pub fn parse_choice(s: &str, max: u32) -> Result<u32> {
    let trimmed = s.trim();
    let choice: u32 = trimmed
        .parse()
        .map_err(|_| anyhow!("'{}' is not a number", trimmed))?;
    if choice < 1 || choice > max {
        bail!("choice must be between 1 and {}", max);
    }
    Ok(choice)
}

/// Parse a non-negative integer.
pub fn parse_id(s: &str) -> Result<i32> {
    let trimmed = s.trim();
    let value: i32 = trimmed
        .parse()
        .map_err(|_| anyhow!("'{}' is not a whole number", trimmed))?;
    if value < 0 {
        bail!("value must not be negative");
    }
    Ok(value)
}

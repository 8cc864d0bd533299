//! Line-oriented question/answer seam used by the interactive session.
//!
//! The session never reads stdin directly; it goes through [`Prompt`], so the
//! whole controller can be driven from a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::config::CitySources;
use crate::error::SessionError;
use crate::filter::{FilterSpec, MONTHS, parse_city, parse_day, parse_month};

/// Something that can ask a question and block until an answer arrives.
pub trait Prompt {
    /// Shows `question` and returns the answer with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// [`SessionError::InputClosed`] when no further input will arrive.
    fn ask(&mut self, question: &str) -> Result<String, SessionError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        (**self).ask(question)
    }
}

/// Reads answers from a buffered reader, echoing questions to a writer.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Prompt wired to the process's stdin and stdout.
pub fn stdin_prompt() -> LinePrompt<io::StdinLock<'static>, io::Stdout> {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Replays a fixed list of answers and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or(SessionError::InputClosed)
    }
}

/// Capitalises each word: `"new york city"` becomes `"New York City"`.
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins choices as `"A, B, or C"`.
fn choice_list(choices: &[String]) -> String {
    match choices {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Asks `question` until `parse` accepts the answer, printing `retry` after
/// every rejected one. There is no retry limit.
fn ask_until<P, T, E>(
    prompt: &mut P,
    out: &mut impl Write,
    question: &str,
    retry: &str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Result<T, SessionError>
where
    P: Prompt + ?Sized,
{
    loop {
        let answer = prompt.ask(question)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "{retry}\n")?,
        }
    }
}

/// Collects a validated city, month and day.
pub fn collect_filters<P: Prompt + ?Sized>(
    prompt: &mut P,
    out: &mut impl Write,
    sources: &CitySources,
) -> Result<FilterSpec, SessionError> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!\n")?;

    let cities: Vec<String> = sources.cities().map(title_case).collect();
    let city_question = format!("Would you like to explore {}? ", choice_list(&cities));
    let city = ask_until(
        prompt,
        out,
        &city_question,
        "I'm sorry. I don't have that city in my database. Please check the options and spelling and try again.",
        |a| parse_city(sources, a),
    )?;
    writeln!(out)?;

    let mut months: Vec<String> = MONTHS.iter().map(|m| m.name().to_string()).collect();
    months.push("all".to_string());
    let month_question = format!("Would you like to see data from {}? ", choice_list(&months));
    let month = ask_until(
        prompt,
        out,
        &month_question,
        "I'm sorry. I don't have that month in my database. Please check the options and spelling and try again.",
        parse_month,
    )?;
    writeln!(out)?;

    let day = ask_until(
        prompt,
        out,
        "Would you like to see data from Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all? ",
        "I'm sorry. That's not a valid day. Please check the options and spelling and try again.",
        parse_day,
    )?;

    Ok(FilterSpec { city, month, day })
}

/// Asks a yes/no question until the answer is exactly "yes" or "no"
/// (case-insensitive).
pub fn ask_yes_no<P: Prompt + ?Sized>(
    prompt: &mut P,
    out: &mut impl Write,
    question: &str,
) -> Result<bool, SessionError> {
    ask_until(
        prompt,
        out,
        question,
        "I'm sorry, I didn't catch that. Was it a yes or a no?",
        |a| match a.to_lowercase().as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            _ => Err(()),
        },
    )
}

/// True only for a case-insensitive "yes".
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

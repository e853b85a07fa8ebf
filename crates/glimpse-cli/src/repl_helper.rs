//! Rustyline integration: completion and hinting backed by the engine.

use std::borrow::Cow;

use glimpse_core::{Api, SymbolPath};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

pub struct GlimpseHelper {
    api: &'static Api,
}

impl GlimpseHelper {
    pub fn new(api: &'static Api) -> Self {
        Self { api }
    }
}

impl Helper for GlimpseHelper {}

impl Completer for GlimpseHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, word) = extract_symbol_at(line, pos);

        // Candidates come back as full dotted display names, so the
        // replacement spans the whole dotted expression.
        let pairs = self
            .api
            .complete(&word)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for GlimpseHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        let (_, word) = extract_symbol_at(line, pos);
        if word.len() < 2 {
            return None;
        }

        let typed = SymbolPath::parse(&word).display();
        let first = self.api.complete(&word).into_iter().next()?;
        let remaining = first.strip_prefix(&typed)?;
        if remaining.is_empty() {
            None
        } else {
            Some(remaining.to_string())
        }
    }
}

impl Highlighter for GlimpseHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        // Hints render in gray
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for GlimpseHelper {}

/// Find the dotted symbol under the cursor.
fn extract_symbol_at(line: &str, pos: usize) -> (usize, String) {
    let before_cursor = &line[..pos];

    let start = before_cursor
        .rfind(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-' || c == '.'))
        .map(|i| i + 1)
        .unwrap_or(0);

    (start, before_cursor[start..].to_string())
}

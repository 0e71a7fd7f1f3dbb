use crate::model::COURSE_PRESETS;
use crate::repl::commands::{CommandId, REPL_COMMANDS, find_command};
use rustyline::Helper;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;

pub(crate) struct ReplHelper;

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_repl(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

pub(crate) fn complete_repl(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let prefix = &line[..pos];
    let token_start = prefix.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
    let current = &prefix[token_start..];
    let mut parts = prefix[..token_start].split_whitespace();
    let Some(first) = parts.next() else {
        let candidates = REPL_COMMANDS
            .iter()
            .filter(|command| command.name.starts_with(current))
            .map(|command| pair(command.name))
            .collect();
        return (token_start, candidates);
    };
    if parts.next().is_some() {
        return (pos, Vec::new());
    }
    let Some(command) = find_command(first) else {
        return (pos, Vec::new());
    };

    if command.id == CommandId::Course {
        let quoted = current.strip_prefix('"').unwrap_or(current);
        let candidates = COURSE_PRESETS
            .iter()
            .filter(|preset| preset.starts_with(quoted))
            .map(|preset| Pair {
                display: (*preset).to_string(),
                replacement: format!("\"{preset}\""),
            })
            .collect();
        return (token_start, candidates);
    }

    let candidates = command
        .subcommands
        .iter()
        .filter(|sub| sub.name.starts_with(current))
        .map(|sub| pair(sub.name))
        .collect();
    (token_start, candidates)
}

fn pair(name: &str) -> Pair {
    Pair {
        display: name.to_string(),
        replacement: name.to_string(),
    }
}

//! Built-in element type table.
//!
//! Fragments are Bash `PS1` escapes or expansions. Previews are plausible
//! sample values; date and time previews come from the injected clock.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::ElementType;
use crate::clock::DateTimeSource;
use crate::generator::Generator;
use crate::params::{param, ParameterSpec};
use crate::textutil::{escape_text, strip_backspaces};

const PUNCTUATION: [&str; 21] = [
    "~", "?", "@", "#", "-", ".", ",", ":", "/", "\\", "|", "(", ")", "[", "]", "{", "}", "<",
    ">", "_", "=",
];

/// Group separator labels. The last four name types that are not in the table.
pub(super) fn separator_before_labels() -> BTreeSet<String> {
    [
        "Date",
        "Space",
        "~",
        "Text",
        "Terminal",
        "History Number",
        "Git branch",
        "Prompt Sign",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(super) fn element_types(clock: &Arc<dyn DateTimeSource>) -> Vec<ElementType> {
    let mut types = session_types();
    types.extend(date_time_types(clock));
    types.extend(control_types());
    types.extend(PUNCTUATION.into_iter().map(punctuation));
    types.extend(custom_types());
    types
}

fn session_types() -> Vec<ElementType> {
    vec![
        ElementType::new("Username", "\\u", "The username of the current user.").preview("user"),
        ElementType::new(
            "Hostname (short)",
            "\\h",
            "The hostname up to the first dot.",
        )
        .preview("host"),
        ElementType::new("Hostname (full)", "\\H", "The full hostname.")
            .preview("host.example.com"),
        ElementType::new(
            "Shell",
            "\\s",
            "The name of the shell, the basename of $0.",
        )
        .preview("bash"),
        ElementType::new("Shell version", "\\v", "The version of Bash, e.g. 5.2.")
            .preview("5.2"),
        ElementType::new(
            "Shell release",
            "\\V",
            "The release of Bash: version plus patch level, e.g. 5.2.21.",
        )
        .preview("5.2.21"),
        ElementType::new(
            "Working directory",
            "\\w",
            "The current working directory, with $HOME abbreviated as a tilde.",
        )
        .preview("~/Documents"),
        ElementType::new(
            "Working directory (basename)",
            "\\W",
            "The basename of the current working directory, with $HOME abbreviated as a tilde.",
        )
        .preview("Documents"),
        ElementType::new(
            "Jobs",
            "\\j",
            "The number of jobs currently managed by the shell.",
        )
        .preview("1"),
        ElementType::new(
            "Command number",
            "\\#",
            "The command number of the next command in this shell session.",
        )
        .preview("42"),
        ElementType::new(
            "Exit status",
            "$?",
            "The exit status of the most recently executed command.",
        )
        .preview("0"),
        ElementType::new(
            "User sign",
            "\\$",
            "A # if the effective user is root, otherwise a $.",
        )
        .preview("$"),
    ]
}

fn date_time_types(clock: &Arc<dyn DateTimeSource>) -> Vec<ElementType> {
    let formatted_clock = Arc::clone(clock);
    vec![
        ElementType::new(
            "Date",
            "\\d",
            "The date in \"Weekday Month Day\" format, e.g. \"Tue May 26\".",
        )
        .preview(clock_preview(clock, "%a %b %d")),
        ElementType::new(
            "Date (formatted)",
            Generator::function(|params| format!("\\D{{{}}}", param(params, "format"))),
            "The date formatted with a strftime(3) format string. An empty format \
             gives the locale's time representation.",
        )
        .parameter(ParameterSpec::new("format", "Format (strftime)"))
        .preview(Generator::function(move |params| {
            let format = match param(params, "format") {
                "" => "%X",
                format => format,
            };
            strip_backspaces(&formatted_clock.format(format))
        })),
        ElementType::new(
            "Time (HH:MM:SS)",
            "\\t",
            "The current time in 24-hour HH:MM:SS format.",
        )
        .preview(clock_preview(clock, "%H:%M:%S")),
        ElementType::new(
            "Time (hh:mm:ss)",
            "\\T",
            "The current time in 12-hour hh:mm:ss format.",
        )
        .preview(clock_preview(clock, "%I:%M:%S")),
        ElementType::new(
            "Time (hh:mm AM/PM)",
            "\\@",
            "The current time in 12-hour am/pm format.",
        )
        .preview(clock_preview(clock, "%I:%M %p")),
        ElementType::new(
            "Time (HH:MM)",
            "\\A",
            "The current time in 24-hour HH:MM format.",
        )
        .preview(clock_preview(clock, "%H:%M")),
        ElementType::new(
            "Time (HH:MM:SS.mmm)",
            "$(date +%H:%M:%S.%3N)",
            "The current time with millisecond precision, read from date(1) \
             each time the prompt is drawn.",
        )
        .preview(clock_preview(clock, "%H:%M:%S%.3f")),
        ElementType::new(
            "Unix timestamp",
            "$(date +%s)",
            "Seconds since 1970-01-01 00:00 UTC, read from date(1) each time the \
             prompt is drawn.",
        )
        .preview(clock_preview(clock, "%s")),
    ]
}

fn control_types() -> Vec<ElementType> {
    vec![
        ElementType::new("Space", " ", "A single space.").non_printable(),
        ElementType::new("Newline", "\\n", "A line break.")
            .preview("\n")
            .non_printable(),
        ElementType::new(
            "Backspace",
            "\\010",
            "A backspace control character; the terminal moves the cursor back \
             over the preceding character.",
        )
        .preview("\u{8}")
        .non_printable(),
        ElementType::new(
            "Bell",
            "\\a",
            "The ASCII bell character. Most terminals beep or flash.",
        )
        .preview("")
        .non_printable(),
    ]
}

fn punctuation(symbol: &'static str) -> ElementType {
    let fragment = if symbol == "\\" { "\\\\" } else { symbol };
    ElementType::new(
        symbol,
        fragment,
        format!("The literal character \"{symbol}\"."),
    )
    .preview(symbol)
}

fn custom_types() -> Vec<ElementType> {
    vec![
        ElementType::new(
            "Text",
            Generator::function(|params| escape_text(param(params, "text"))),
            "Custom text. Characters the shell would expand are escaped.",
        )
        .parameter(ParameterSpec::new("text", "Text"))
        .preview(Generator::function(|params| param(params, "text").to_string())),
        ElementType::new(
            "Environment variable",
            Generator::function(|params| match param(params, "variable") {
                "" => String::new(),
                name => format!("${{{name}}}"),
            }),
            "The value of an environment or shell variable, expanded each time \
             the prompt is drawn.",
        )
        .parameter(ParameterSpec::new("variable", "Variable name"))
        .preview(Generator::function(|params| match param(params, "variable") {
            "" => String::new(),
            name => format!("${name}"),
        })),
        ElementType::new(
            "Command output",
            Generator::function(|params| match param(params, "command") {
                "" => String::new(),
                command => format!("$({command})"),
            }),
            "The output of a shell command, run each time the prompt is drawn.",
        )
        .parameter(ParameterSpec::new("command", "Command"))
        .preview(Generator::function(|params| match param(params, "command") {
            "" => String::new(),
            command => format!("[{command}]"),
        })),
    ]
}

fn clock_preview(clock: &Arc<dyn DateTimeSource>, pattern: &'static str) -> Generator {
    let clock = Arc::clone(clock);
    Generator::function(move |_| clock.format(pattern))
}

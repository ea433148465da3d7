//! Text helpers shared by element generators.
//!
//! Both helpers are total: they accept any string and never fail.

/// ASCII backspace control character.
pub const BACKSPACE: char = '\u{8}';

/// Characters that Bash expands inside a prompt string unless escaped.
const SHELL_SPECIAL: [char; 4] = ['$', '`', '\\', '!'];

/// Apply every backspace in `text` to the character before it.
///
/// Equivalent to repeatedly deleting the first "optional character followed
/// by a backspace" span until no backspace remains. Any character is erased,
/// newlines included. A backspace with nothing before it only removes itself.
pub fn strip_backspaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == BACKSPACE {
            out.pop();
        } else {
            out.push(ch);
        }
    }
    out
}

/// Escape `$`, `` ` ``, `\` and `!` with a leading backslash.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if SHELL_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

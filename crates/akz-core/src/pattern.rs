//! Pattern-mode shorthand.
//!
//! `C` stands for any consonant and `V` for any vowel of the dictionary language.
//! Everything else is ordinary `regex` syntax, matched anywhere inside the lemma.

use std::iter::Peekable;
use std::str::Chars;

use regex::Regex;

use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternClasses {
    pub consonants: &'static str,
    pub vowels: &'static str,
}

/// Expand `C`/`V` into character classes.
///
/// Inside a bracket class the members are spliced in bare, so `[CV]` is the union of both.
/// `\C` and `\V` are the literal letters. Escapes, including hex code points (`\x{..}`,
/// `\u00C9`), Unicode classes (`\p{..}`), ASCII classes (`[:alpha:]`) and group names are
/// copied untouched.
pub fn translate(pattern: &str, classes: &PatternClasses) -> String {
    let mut out = String::with_capacity(pattern.len() * 4);
    let mut chars = pattern.chars().peekable();
    let mut class_depth = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(letter @ ('C' | 'V')) => out.push(letter),
                Some(kind @ ('p' | 'P')) => {
                    out.push('\\');
                    out.push(kind);
                    if chars.peek() == Some(&'{') {
                        copy_through(&mut chars, &mut out, '}');
                    } else if let Some(name) = chars.next() {
                        out.push(name);
                    }
                }
                Some(kind @ ('x' | 'u' | 'U')) => {
                    out.push('\\');
                    out.push(kind);
                    if chars.peek() == Some(&'{') {
                        copy_through(&mut chars, &mut out, '}');
                    } else {
                        let digits = match kind {
                            'x' => 2,
                            'u' => 4,
                            _ => 8,
                        };
                        out.extend(chars.by_ref().take(digits));
                    }
                }
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                // Dangling escape; let the regex parser reject it
                None => out.push('\\'),
            },
            '[' if class_depth > 0 && chars.peek() == Some(&':') => {
                out.push('[');
                copy_through(&mut chars, &mut out, ']');
            }
            '[' => {
                class_depth += 1;
                out.push('[');
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('^');
                }
                // A leading `]` is a literal member
                if chars.peek() == Some(&']') {
                    chars.next();
                    out.push(']');
                }
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                out.push(']');
            }
            '(' if class_depth == 0 => {
                out.push('(');
                if chars.peek() == Some(&'?') {
                    chars.next();
                    out.push('?');
                    if chars.peek() == Some(&'P') {
                        chars.next();
                        out.push('P');
                    }
                    if chars.peek() == Some(&'<') {
                        copy_through(&mut chars, &mut out, '>');
                    }
                }
            }
            'C' => push_class(&mut out, classes.consonants, class_depth > 0),
            'V' => push_class(&mut out, classes.vowels, class_depth > 0),
            other => out.push(other),
        }
    }

    out
}

/// Translate and compile; the result is matched unanchored.
pub fn compile(pattern: &str, classes: &PatternClasses) -> Result<Regex, SearchError> {
    let translated = translate(pattern, classes);
    match Regex::new(&translated) {
        Ok(regex) => Ok(regex),
        Err(source) => Err(SearchError::Pattern {
            pattern: pattern.to_string(),
            translated,
            source,
        }),
    }
}

fn push_class(out: &mut String, members: &str, in_class: bool) {
    if in_class {
        out.push_str(members);
    } else {
        out.push('[');
        out.push_str(members);
        out.push(']');
    }
}

fn copy_through(chars: &mut Peekable<Chars<'_>>, out: &mut String, end: char) {
    for c in chars.by_ref() {
        out.push(c);
        if c == end {
            break;
        }
    }
}

//! Content rewriting: episema stripping and Unicode escaping.

/// Replacements applied to every content line, in this order, each one
/// across the whole line. Later keys see the output of earlier ones.
pub const UNICODE_ESCAPES: &[(&str, &str)] = &[
    ("ae", "\u{e6}"),
    ("Ae", "\u{c6}"),
    ("AE", "\u{c6}"),
    ("\u{153}", "<sp>oe</sp>"),
    ("\u{1fd}", "<sp>'ae</sp>"),
    // `áe` as it arrives when UTF-8 was decoded as Latin-1 upstream.
    ("\u{c3}\u{a1}e", "<sp>'ae</sp>"),
    ("\u{2020}", "+"),
];

/// Characters marking episemas (vocal emphasis) in the notation.
const EPISEMA_MARKS: [char; 2] = ['\'', '_'];

/// Which optional transformations to run on the content block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentOptions {
    pub remove_episemas: bool,
}

pub fn remove_episemas_line(line: &str) -> String {
    line.replace(EPISEMA_MARKS, "")
}

pub fn remove_episemas(content: &[String]) -> Vec<String> {
    content.iter().map(|l| remove_episemas_line(l)).collect()
}

/// A plain `oe` may be a ligature the source didn't encode; there's no way
/// to tell from the text alone.
pub fn contains_ambiguous_oe(line: &str) -> bool {
    line.contains("oe")
}

pub fn escape_unicode_line(line: &str) -> String {
    UNICODE_ESCAPES
        .iter()
        .fold(line.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Escapes every line, warning about lines with an unjoined `oe`.
pub fn escape_unicode(content: &[String]) -> Vec<String> {
    content
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if contains_ambiguous_oe(line) {
                tracing::warn!(
                    line = i + 1,
                    "text contains sequence OE, can't tell if it should be joined: {}",
                    line
                );
            }
            escape_unicode_line(line)
        })
        .collect()
}

/// Runs the enabled transformations. Episemas go first: the escape table
/// emits `'` and stripping afterwards would eat it.
pub fn transform_content(content: &[String], opts: ContentOptions) -> Vec<String> {
    if opts.remove_episemas {
        escape_unicode(&remove_episemas(content))
    } else {
        escape_unicode(content)
    }
}

//! Minimal markup reader for rich messages.
//!
//! Understands bold (`<strong>`, `<b>`) and line breaks (`<br>`, `\n`).
//! Any other tag is dropped while its inner text is kept, except for
//! `<script>` and `<style>` whose content is never shown. The common
//! character entities are decoded.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)[^>]*>").expect("tag pattern is valid")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);").expect("entity pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub lines: Vec<Vec<Span>>,
}

impl Markup {
    /// Text without styling, one `\n` per line break.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_text(&mut self, text: &str, bold: bool) {
        if text.is_empty() {
            return;
        }
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let Some(line) = self.lines.last_mut() else {
            return;
        };
        match line.last_mut() {
            Some(last) if last.bold == bold => last.text.push_str(text),
            _ => line.push(Span {
                text: text.to_string(),
                bold,
            }),
        }
    }

    fn break_line(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        self.lines.push(Vec::new());
    }

    fn push_segment(&mut self, raw: &str, bold: bool) {
        let decoded = decode_entities(raw);
        for (index, part) in decoded.split('\n').enumerate() {
            if index > 0 {
                self.break_line();
            }
            self.push_text(part, bold);
        }
    }
}

pub fn parse(source: &str) -> Markup {
    let mut markup = Markup::default();
    let mut bold_depth = 0usize;
    let mut cursor = 0;
    // Open script/style tag; everything up to its closing tag is skipped.
    let mut hidden: Option<String> = None;

    for captures in TAG.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let closing = !captures[1].is_empty();
        let name = captures[2].to_ascii_lowercase();

        if let Some(open) = &hidden {
            if closing && *open == name {
                hidden = None;
                cursor = whole.end();
            }
            continue;
        }

        markup.push_segment(&source[cursor..whole.start()], bold_depth > 0);
        cursor = whole.end();

        match name.as_str() {
            "script" | "style" if !closing => hidden = Some(name.clone()),
            "br" => markup.break_line(),
            "strong" | "b" if closing => bold_depth = bold_depth.saturating_sub(1),
            "strong" | "b" => bold_depth += 1,
            _ => {}
        }
    }
    if hidden.is_none() {
        markup.push_segment(&source[cursor..], bold_depth > 0);
    }

    markup
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let name = &captures[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => numeric_entity(name),
            };
            decoded.map_or_else(|| captures[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_entity(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

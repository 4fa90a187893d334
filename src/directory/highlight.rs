use regex::RegexBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub marked: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), marked: false }
    }

    fn mark(text: &str) -> Self {
        Self { text: text.to_string(), marked: true }
    }
}

/// Splits `text` into plain and marked runs. Tokens are applied in order and
/// only ever split plain runs, so an earlier match is never re-split by a
/// later token. Matching is case-insensitive and the original casing is kept.
pub fn highlight_segments(text: &str, tokens: &[String]) -> Vec<Segment> {
    let mut segments = vec![Segment::plain(text)];

    for token in tokens.iter().filter(|t| !t.is_empty()) {
        let pattern = match RegexBuilder::new(&regex::escape(token)).case_insensitive(true).build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::debug!("Skipping highlight for {token:?}: {e}");
                continue;
            }
        };

        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            if segment.marked {
                next.push(segment);
                continue;
            }

            let mut last = 0;
            for found in pattern.find_iter(&segment.text) {
                if found.start() > last {
                    next.push(Segment::plain(&segment.text[last..found.start()]));
                }
                next.push(Segment::mark(found.as_str()));
                last = found.end();
            }
            if last < segment.text.len() {
                next.push(Segment::plain(&segment.text[last..]));
            }
        }
        segments = next;
    }

    segments.retain(|s| !s.text.is_empty());
    segments
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Every run is escaped on its own and marked runs are wrapped in `<mark>`,
/// so record content can never inject markup.
pub fn segments_to_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.marked {
                format!("<mark>{}</mark>", escape_html(&segment.text))
            } else {
                escape_html(&segment.text)
            }
        })
        .collect()
}

pub fn highlight_html(text: &str, tokens: &[String]) -> String {
    segments_to_html(&highlight_segments(text, tokens))
}

use std::{
    fs,
    path::Path,
};

use crate::{
    core::{
        Mentor,
        PortalError,
    },
    directory::{
        build_card,
        card::TagStyle,
        highlight::{
            escape_html,
            segments_to_html,
        },
        DirectoryView,
    },
    persistence::Favorites,
};

const PRINT_STYLE: &str = "body{font-family:sans-serif;margin:24px;color:#0b2a5b}\
.card{border:1px solid #e2e8f0;border-radius:12px;padding:12px 14px;margin:0 0 12px;\
break-inside:avoid}\
.sub{color:#475569;margin:2px 0 8px}.tag{display:inline-block;border:1px solid #e2e8f0;\
border-radius:999px;padding:2px 8px;margin:0 4px 4px 0;font-size:12px}\
.tag.gold{background:#f6ecd6}.tag.primary{color:#0b2a5b;font-weight:700}\
.small{font-size:12px;color:#64748b}mark{padding:0 .12em;border-radius:.35em}";

/// A standalone, print-ready HTML page of the cards currently shown.
pub fn render_printable(
    mentors: &[Mentor],
    view: &DirectoryView,
    favorites: &Favorites,
    title: &str,
) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{PRINT_STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n\
         <p class=\"small\">{shown} of {total} mentors · generated {generated}</p>\n",
        title = escape_html(title),
        shown = view.shown.len(),
        total = view.total_matches,
    );

    if view.is_empty() {
        html.push_str(
            "<div class=\"card\"><strong>No mentors found</strong>\
             <div class=\"small\">Try clearing filters or searching a broader term.</div></div>\n",
        );
    }

    for mentor in view.mentors(mentors) {
        let card = build_card(mentor, &view.tokens, favorites);
        let star = if card.favorite { " ★" } else { "" };
        html.push_str("<article class=\"card\">\n");
        html.push_str(&format!(
            "<h3>{}{star}</h3>\n<p class=\"sub\">{}</p>\n<div>",
            segments_to_html(&card.name),
            segments_to_html(&card.subtitle)
        ));
        for tag in &card.tags {
            let class = match tag.style {
                TagStyle::Plain => "tag",
                TagStyle::Gold => "tag gold",
                TagStyle::Primary => "tag primary",
            };
            html.push_str(&format!("<span class=\"{class}\">{}</span>", escape_html(&tag.text)));
        }
        html.push_str(&format!(
            "</div>\n<div class=\"small\">{}</div>\n</article>\n",
            escape_html(&card.footer)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

pub fn write_printable(path: &Path, html: &str) -> Result<(), PortalError> {
    fs::write(path, html)?;
    tracing::info!("Printable directory written to {}", path.display());
    Ok(())
}

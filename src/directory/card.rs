use super::highlight::{
    highlight_segments,
    Segment,
};
use crate::{
    core::{
        Mentor,
        MentorId,
    },
    persistence::Favorites,
};

const PLACEHOLDER: &str = "—";
const VISIBLE_INTERESTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Plain,
    Gold,
    Primary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub text: String,
    pub style: TagStyle,
}

impl Tag {
    fn new(text: impl Into<String>, style: TagStyle) -> Self {
        Self { text: text.into(), style }
    }
}

/// Everything a card shows, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorCard {
    pub id: MentorId,
    pub initials: String,
    pub name: Vec<Segment>,
    pub subtitle: Vec<Segment>,
    pub favorite: bool,
    pub tags: Vec<Tag>,
    pub footer: String,
}

fn or_placeholder(text: &str) -> &str {
    if text.is_empty() {
        PLACEHOLDER
    } else {
        text
    }
}

fn year_text(mentor: &Mentor) -> String {
    mentor.grad_year.map(|y| y.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn build_card(mentor: &Mentor, tokens: &[String], favorites: &Favorites) -> MentorCard {
    let availability_style =
        if mentor.availability == "Available" { TagStyle::Gold } else { TagStyle::Plain };

    let mut tags = vec![
        Tag::new(or_placeholder(&mentor.availability), availability_style),
        Tag::new(or_placeholder(&mentor.mode), TagStyle::Primary),
    ];
    tags.extend(
        mentor
            .interests
            .iter()
            .take(VISIBLE_INTERESTS)
            .map(|i| Tag::new(i.as_str(), TagStyle::Plain)),
    );
    if mentor.interests.len() > VISIBLE_INTERESTS {
        tags.push(Tag::new(
            format!("+{} more", mentor.interests.len() - VISIBLE_INTERESTS),
            TagStyle::Plain,
        ));
    }

    MentorCard {
        id: mentor.id.clone(),
        initials: mentor.initials(),
        name: highlight_segments(&mentor.name, tokens),
        subtitle: highlight_segments(&mentor.role_line(), tokens),
        favorite: favorites.contains(&mentor.id),
        tags,
        footer: format!(
            "{} · Class of {}",
            or_placeholder(&mentor.availability),
            year_text(mentor)
        ),
    }
}

/// Field values for the detail dialog, with placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorDetails {
    pub id: MentorId,
    pub name: String,
    pub role_line: String,
    pub org: String,
    pub year: String,
    pub interests: String,
    pub mode: String,
    pub availability: String,
    pub notes: String,
    pub request_link: String,
}

/// The mentor's own link wins unless it is empty or `#`; then the global
/// request form; then `#`.
pub fn resolve_request_link(mentor: &Mentor, global_form: Option<&str>) -> String {
    let usable = |link: &&str| !link.is_empty() && *link != "#";
    mentor
        .request_link
        .as_deref()
        .filter(usable)
        .or(global_form.filter(usable))
        .unwrap_or("#")
        .to_string()
}

impl MentorDetails {
    pub fn new(mentor: &Mentor, global_form: Option<&str>) -> Self {
        Self {
            id: mentor.id.clone(),
            name: mentor.name.clone(),
            role_line: mentor.role_line(),
            org: or_placeholder(&mentor.org).to_string(),
            year: year_text(mentor),
            interests: or_placeholder(&mentor.interests.join(", ")).to_string(),
            mode: or_placeholder(&mentor.mode).to_string(),
            availability: or_placeholder(&mentor.availability).to_string(),
            notes: or_placeholder(&mentor.notes).to_string(),
            request_link: resolve_request_link(mentor, global_form),
        }
    }

    pub fn has_request_link(&self) -> bool {
        self.request_link != "#"
    }
}

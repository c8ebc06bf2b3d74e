//! List Markup
//!
//! Renders board entries to HTML for the feedback list. Every
//! user-controlled field goes through `escape_html`.

use std::fmt::Write;

use crate::board::{BoardEntry, FeedbackBoard, ListStatus};

const SPINNER_HTML: &str = r#"<div class="spinner"></div>"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Text that replaces the list when the initial fetch fails
pub fn load_failure_text(message: &str) -> String {
    format!("Failed to fetch feedback items. Error message: {}", message)
}

/// One `<li class="feedback">`, tagged with its entry id
pub fn render_entry(entry: &BoardEntry) -> String {
    let item = &entry.item;
    let mut html = String::new();

    let class = if entry.expanded { "feedback feedback--expand" } else { "feedback" };
    let disabled = if entry.upvoted { " disabled" } else { "" };

    let _ = write!(
        html,
        concat!(
            r#"<li class="{class}" data-id="{id}">"#,
            r#"<button class="upvote"{disabled}>"#,
            r#"<i class="fa-solid fa-caret-up upvote__icon"></i>"#,
            r#"<span class="upvote__count">{count}</span>"#,
            r#"</button>"#,
            r#"<section class="feedback__badge"><p class="feedback__letter">{letter}</p></section>"#,
            r#"<div class="feedback__content">"#,
            r#"<p class="feedback__company">{company}</p>"#,
            r#"<p class="feedback__text">{text}</p>"#,
            r#"</div>"#,
            r#"<p class="feedback__date">{date}</p>"#,
            r#"</li>"#,
        ),
        class = class,
        id = entry.id,
        disabled = disabled,
        count = item.upvote_count,
        letter = escape_html(&item.badge_letter),
        company = escape_html(&item.company),
        text = escape_html(&item.text),
        date = item.date_label(),
    );
    html
}

/// Whole list content: spinner or failure text first, then entries
pub fn render_board(board: &FeedbackBoard) -> String {
    let mut html = match board.status() {
        ListStatus::Loading => SPINNER_HTML.to_string(),
        ListStatus::Loaded => String::new(),
        ListStatus::Failed(message) => escape_html(&load_failure_text(message)),
    };
    for entry in board.entries() {
        html.push_str(&render_entry(entry));
    }
    html
}

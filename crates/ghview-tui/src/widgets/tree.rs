//! Lays a `ghview_core::Node` tree out as styled terminal lines.
//!
//! Images cannot be drawn inline, so an image node becomes a marker plus
//! its URL. Featured cards are indented; every user card is followed by a
//! blank line.

use ghview_core::{Class, Node};
use ratatui::text::{Line, Span};

use crate::theme;

const INDENT: usize = 2;
const IMAGE_MARKER: &str = "▣ ";

/// Flatten a tree into lines, top to bottom.
pub fn lines(root: &Node) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    push_lines(root, 0, &mut out);
    out
}

fn push_lines(node: &Node, indent: usize, out: &mut Vec<Line<'static>>) {
    let pad = " ".repeat(indent);
    match node {
        Node::Block { class, children } => {
            let child_indent = if *class == Class::Featured {
                indent + INDENT
            } else {
                indent
            };
            for child in children {
                push_lines(child, child_indent, out);
            }
            if *class == Class::User {
                out.push(Line::default());
            }
        }
        Node::Image { class, src } => out.push(Line::from(vec![
            Span::raw(pad),
            Span::styled(IMAGE_MARKER, theme::key_hint()),
            Span::styled(src.clone(), theme::class_style(*class)),
        ])),
        Node::Text { class, text } => out.push(Line::from(vec![
            Span::raw(pad),
            Span::styled(text.clone(), theme::class_style(*class)),
        ])),
    }
}

#[cfg(test)]
mod tests {
    use ghview_core::{Profile, ViewState, view};
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn profile_card_lines() {
        let state = ViewState::Loaded {
            profile: Profile::new("joshuaai", Some("Joshua A I".into()), "https://x/a.png"),
        };

        let out = plain(&lines(&view::render(&state)));

        assert_eq!(
            out,
            vec![
                "▣ https://x/a.png".to_owned(),
                "Joshua A I".to_owned(),
                "@joshuaai".to_owned(),
                String::new(),
            ]
        );
    }

    #[test]
    fn featured_cards_are_indented() {
        let out = plain(&lines(&view::render_home()));

        assert_eq!(out[0], "Enter a Github Username");
        assert!(out.iter().any(|l| l == "  Joshua A I"));
        assert!(out.iter().any(|l| l.starts_with("  ▣ https://avatars2")));
    }

    #[test]
    fn loading_is_single_line() {
        let out = plain(&lines(&view::render(&ViewState::loading("octocat"))));
        assert_eq!(out, vec!["Loading octocat...".to_owned()]);
    }
}

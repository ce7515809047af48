use maud::{html, Markup};

use crate::{
    inline_code::{self, Segment},
    models::Difficulty,
};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn difficulty_badge(difficulty: Difficulty) -> Markup {
    let class = match difficulty {
        Difficulty::Easy => "badge easy",
        Difficulty::Medium => "badge medium",
        Difficulty::Hard => "badge hard",
    };
    html! {
        span class=(class) { (difficulty) }
    }
}

pub fn badge(text: &str) -> Markup {
    html! {
        span.badge { (text) }
    }
}

pub fn tags(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            span.tag { (tag) }
        }
    }
}

/// Free text with `<code>` spans rendered as code elements. Everything else,
/// malformed markers included, is escaped plain text.
pub fn rich_text(text: &str) -> Markup {
    html! {
        p.pre-wrap {
            @for segment in inline_code::parse(text) {
                @match segment {
                    Segment::Plain(plain) => { (plain) }
                    Segment::Code(snippet) => { code { (snippet) } }
                }
            }
        }
    }
}

pub fn code_block(code: &str, language: Option<&str>) -> Markup {
    let class = language.map(|l| format!("language-{l}"));
    html! {
        pre { code class=[class] { (code) } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_text_escapes_plain_and_code() {
        let html = rich_text("a < b and <code>x <= y</code>").into_string();
        assert_eq!(
            html,
            r#"<p class="pre-wrap">a &lt; b and <code>x &lt;= y</code></p>"#
        );
    }

    #[test]
    fn rich_text_leaves_unclosed_marker_as_text() {
        let html = rich_text("see <code>oops").into_string();
        assert_eq!(html, r#"<p class="pre-wrap">see &lt;code&gt;oops</p>"#);
    }

    #[test]
    fn code_block_marks_language() {
        let html = code_block("fn main() {}", Some("rust")).into_string();
        assert!(html.contains(r#"class="language-rust""#));
        assert!(!code_block("x", None).into_string().contains("class"));
    }
}

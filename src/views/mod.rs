pub mod account;
pub mod companies;
pub mod components;
pub mod contribute;
pub mod homepage;
pub mod layout;
pub mod questions;

// Re-export commonly used functions from layout
pub use layout::{page, titled};

use maud::Markup;

use crate::extractors::AuthMarker;

/// Full page for normal navigation, title + body fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, marker: AuthMarker) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, marker.is_signed_in())
    }
}

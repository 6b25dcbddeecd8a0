//! # platform-landing
//!
//! Leptos SSR renderer for the platform marketing landing page.
//!
//! This crate generates the complete landing page — hero banner, three-card
//! feature grid, and footer link groups — as a static HTML document using
//! [Leptos](https://leptos.dev/) server-side rendering. The page carries no
//! state and no interactivity: every heading, feature card, and footer link
//! is authored literally in the components, so rendering is a pure function
//! from nothing to a fixed document.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - One Leptos component per page section
//! - **Type-Safe** - Full Rust type safety from components to HTML
//! - **Self-Contained Output** - Inline stylesheet, no external assets
//!
//! ## Quick Start
//!
//! ```rust
//! use platform_landing::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("landing.html", html)?;
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components (document shell and page sections)
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <PageDocument /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page to an HTML string.
///
/// This is the composition root: it instantiates the [`PageDocument`]
/// component tree and serializes it. The output is deterministic — calling
/// this twice yields byte-identical strings — and includes `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use platform_landing::render_page;
///
/// let html = render_page();
/// assert!(html.contains("Welcome to Our Amazing Platform"));
/// ```
pub fn render_page() -> String {
    let doc = view! { <PageDocument /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index_of(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Welcome to Our Amazing Platform"));
    }

    #[test]
    fn sections_appear_once_and_in_order() {
        let html = render_page();

        assert_eq!(html.matches("class=\"hero\"").count(), 1);
        assert_eq!(html.matches("class=\"features\"").count(), 1);
        assert_eq!(html.matches("class=\"footer\"").count(), 1);

        let hero = index_of(&html, "class=\"hero\"");
        let features = index_of(&html, "class=\"features\"");
        let footer = index_of(&html, "class=\"footer\"");
        assert!(hero < features, "hero must precede features");
        assert!(features < footer, "features must precede footer");
    }

    #[test]
    fn features_grid_has_exactly_three_cards() {
        let html = render_page();

        assert_eq!(html.matches("class=\"feature-card\"").count(), 3);

        // Each card carries its literal icon, title, and description.
        assert!(html.contains("⚡"));
        assert!(html.contains("Lightning Fast"));
        assert!(html.contains("optimized infrastructure and modern architecture"));

        assert!(html.contains("🔒"));
        // `&` in text nodes is entity-escaped by the SSR encoder.
        assert!(html.contains("Secure &amp; Reliable"));
        assert!(html.contains("99.9% uptime"));

        assert!(html.contains("🎨"));
        assert!(html.contains("Beautiful Design"));
        assert!(html.contains("across all devices and screen sizes"));
    }

    #[test]
    fn footer_groups_are_labeled_and_ordered() {
        let html = render_page();

        assert_eq!(html.matches("class=\"footer-heading\"").count(), 3);

        let product = index_of(&html, ">Product<");
        let company = index_of(&html, ">Company<");
        let connect = index_of(&html, ">Connect<");
        assert!(product < company && company < connect);
    }

    #[test]
    fn product_group_links_in_order() {
        let html = render_page();

        let features = index_of(&html, ">Features<");
        let pricing = index_of(&html, ">Pricing<");
        let docs = index_of(&html, ">Documentation<");
        assert!(features < pricing && pricing < docs);

        // Product links precede the Company group.
        let company = index_of(&html, ">Company<");
        assert!(docs < company);
    }

    #[test]
    fn hero_exposes_two_inert_buttons() {
        let html = render_page();

        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains("Get Started"));
        assert!(html.contains("Learn More"));

        // Inert: no handlers are serialized anywhere in the document.
        assert!(!html.contains("onclick"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn footer_bottom_line_is_literal() {
        let html = render_page();

        assert!(html.contains("© 2024 Your Company. All rights reserved."));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }
}

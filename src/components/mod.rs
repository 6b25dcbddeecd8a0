//! Leptos UI components for the landing page.
//!
//! Each page section is its own `#[component]` function, composed by
//! [`PageDocument`] into the complete HTML document.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Hero
//! ├── Features
//! │   └── FeatureCard (x3, literal)
//! └── Footer
//! ```

mod document;
mod features;
mod footer;
mod hero;

pub use document::PageDocument;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;

//! Root document component - the complete HTML page.

use super::{Features, Footer, Hero};
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document for the landing page.
///
/// Wraps the three page sections in an `<html>` shell with the inline
/// stylesheet, so the rendered output is a single self-contained file.
#[component]
pub fn PageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>"Our Amazing Platform"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Hero />
                    <Features />
                    <Footer />
                </div>
            </body>
        </html>
    }
}

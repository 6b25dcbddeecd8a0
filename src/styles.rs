//! CSS styles for the landing page.
//!
//! The stylesheet is inlined into the document `<head>` so the rendered
//! page is a single self-contained file. Styling is purely presentational:
//! it never changes the section structure or text content.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use platform_landing::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the landing page.
///
/// Provides:
/// - Base typography and spacing
/// - Hero banner with gradient background and CTA buttons
/// - Three-column feature grid
/// - Footer link groups
/// - Responsive breakpoint collapsing grids on narrow viewports
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-footer: #1a202c;
    --text-dark: #2d3748;
    --text-dim: #718096;
    --text-light: #f7fafc;
    --accent: #667eea;
    --accent-deep: #764ba2;
    --border-subtle: rgba(45, 55, 72, 0.1);
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1100px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-dark);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

/* Hero */
.hero {
    display: grid;
    grid-template-columns: 1fr 1fr;
    align-items: center;
    gap: 48px;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 96px 24px;
}

.hero-title {
    font-size: 48px;
    line-height: 1.15;
    margin: 0 0 16px;
    background: linear-gradient(135deg, var(--accent), var(--accent-deep));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-subtitle {
    font-size: 18px;
    color: var(--text-dim);
    margin: 0 0 32px;
}

.hero-actions {
    display: flex;
    gap: 16px;
}

.btn {
    font-family: inherit;
    font-size: 16px;
    font-weight: 600;
    padding: 12px 28px;
    border-radius: 8px;
    border: 2px solid transparent;
    cursor: pointer;
}

.btn-primary {
    background: linear-gradient(135deg, var(--accent), var(--accent-deep));
    color: var(--text-light);
}

.btn-secondary {
    background: transparent;
    color: var(--accent);
    border-color: var(--accent);
}

.hero-visual {
    display: flex;
    justify-content: center;
}

.hero-placeholder {
    font-size: 120px;
    line-height: 1;
    padding: 48px;
    border-radius: 24px;
    background: linear-gradient(135deg, rgba(102, 126, 234, 0.12), rgba(118, 75, 162, 0.12));
}

/* Features */
.features {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 64px 24px;
}

.section-title {
    font-size: 32px;
    text-align: center;
    margin: 0 0 48px;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

.feature-card {
    padding: 32px;
    border: 1px solid var(--border-subtle);
    border-radius: 12px;
    text-align: center;
}

.feature-icon {
    font-size: 40px;
    margin-bottom: 16px;
}

.feature-title {
    font-size: 20px;
    margin: 0 0 12px;
}

.feature-description {
    color: var(--text-dim);
    margin: 0;
}

/* Footer */
.footer {
    margin-top: auto;
    background: var(--bg-footer);
    color: var(--text-light);
    padding: 48px 24px 24px;
}

.footer-groups {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
    max-width: var(--container-max);
    margin: 0 auto;
}

.footer-heading {
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    margin: 0 0 12px;
}

.footer-links {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-links li {
    margin-bottom: 8px;
}

.footer-links a,
.social-link {
    color: var(--text-dim);
    text-decoration: none;
}

.social-links {
    display: flex;
    gap: 16px;
}

.footer-bottom {
    max-width: var(--container-max);
    margin: 32px auto 0;
    padding-top: 24px;
    border-top: 1px solid rgba(247, 250, 252, 0.15);
    text-align: center;
    color: var(--text-dim);
    font-size: 14px;
}

/* Responsive */
@media (max-width: 768px) {
    .hero {
        grid-template-columns: 1fr;
        padding: 48px 24px;
        text-align: center;
    }

    .hero-actions {
        justify-content: center;
    }

    .hero-title {
        font-size: 36px;
    }

    .features-grid,
    .footer-groups {
        grid-template-columns: 1fr;
    }
}
"#;

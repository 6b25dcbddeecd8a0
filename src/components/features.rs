//! Features section - the three-card benefit grid.

use leptos::prelude::*;

/// Feature grid with exactly three cards.
///
/// The cards are authored as three literal invocations, not rendered from a
/// collection - the page has no data model to iterate over.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h2 class="section-title">"Why Choose Us?"</h2>
            <div class="features-grid">
                <FeatureCard
                    icon="⚡"
                    title="Lightning Fast"
                    description="Experience blazing fast performance with our optimized infrastructure and modern architecture."
                />
                <FeatureCard
                    icon="🔒"
                    title="Secure & Reliable"
                    description="Enterprise-grade security with 99.9% uptime guarantee to keep your data safe and accessible."
                />
                <FeatureCard
                    icon="🎨"
                    title="Beautiful Design"
                    description="Stunning, responsive interfaces that work seamlessly across all devices and screen sizes."
                />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

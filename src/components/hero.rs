//! Hero section - headline, subtitle, and the primary calls to action.

use leptos::prelude::*;

/// Top banner with the main headline and two call-to-action buttons.
///
/// The buttons are deliberately inert: no handlers exist anywhere on this
/// page, so activating them does nothing observable.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    "Welcome to Our Amazing Platform"
                </h1>
                <p class="hero-subtitle">
                    "Build faster, scale better, and innovate with confidence using our cutting-edge tools and services."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary">
                        "Get Started"
                    </button>
                    <button class="btn btn-secondary">
                        "Learn More"
                    </button>
                </div>
            </div>
            <div class="hero-visual">
                <div class="hero-placeholder">
                    "🚀"
                </div>
            </div>
        </section>
    }
}

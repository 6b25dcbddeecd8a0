//! Footer - link groups and the copyright line.

use leptos::prelude::*;

/// Page footer with three labeled link groups and the copyright line.
///
/// Link targets are placeholder anchors. The "Connect" group renders as a
/// row of social links rather than a list, matching the two distinct shapes
/// the page uses.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-groups">
                <div class="footer-group">
                    <h4 class="footer-heading">"Product"</h4>
                    <ul class="footer-links">
                        <li><a href="#features">"Features"</a></li>
                        <li><a href="#pricing">"Pricing"</a></li>
                        <li><a href="#docs">"Documentation"</a></li>
                    </ul>
                </div>
                <div class="footer-group">
                    <h4 class="footer-heading">"Company"</h4>
                    <ul class="footer-links">
                        <li><a href="#about">"About"</a></li>
                        <li><a href="#contact">"Contact"</a></li>
                        <li><a href="#careers">"Careers"</a></li>
                    </ul>
                </div>
                <div class="footer-group">
                    <h4 class="footer-heading">"Connect"</h4>
                    <div class="social-links">
                        <a href="#" class="social-link">"Twitter"</a>
                        <a href="#" class="social-link">"GitHub"</a>
                        <a href="#" class="social-link">"LinkedIn"</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2024 Your Company. All rights reserved."</p>
            </div>
        </footer>
    }
}

//! Landing page linking into the creator.

use leptos::prelude::*;

use crate::pages::creator::DEFAULT_PROJECT_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <header class="home__header">
                <span class="home__brand">"Brickyard"</span>
                <span class="home__tagline">"AR construction design"</span>
            </header>
            <section class="home__projects">
                <h2 class="home__section-title">"Projects"</h2>
                <a class="home__project" href="/creator">
                    <span class="home__project-name">{DEFAULT_PROJECT_NAME}</span>
                    <span class="home__project-hint">"Open in creator"</span>
                </a>
            </section>
        </main>
    }
}

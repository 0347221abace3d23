//! Static about page.

use leptos::prelude::*;

const VALUES: [(&str, &str, &str); 4] = [
    (
        "⚓",
        "Maritime Excellence",
        "We understand the unique needs of boat owners and marina operators, ensuring every docking experience meets the highest standards.",
    ),
    (
        "🌍",
        "Global Reach",
        "From Mediterranean marinas to Caribbean harbors, we connect you with premium docking spaces in the world's most beautiful destinations.",
    ),
    (
        "🛡",
        "Trust & Security",
        "Secure payments, verified marinas, and 24/7 support ensure your booking experience is safe and reliable.",
    ),
    (
        "♥",
        "Community First",
        "We support local marina communities and promote sustainable maritime tourism that benefits everyone involved.",
    ),
];

const STATS: [(&str, &str); 4] = [("500+", "Partner Marinas"), ("50+", "Countries"), ("10K+", "Happy Boaters"), ("24/7", "Support")];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__hero">
                <h1>"About DockNow"</h1>
                <p>
                    "Connecting boat owners with premium docking spaces worldwide. We're changing how maritime enthusiasts discover, book, and enjoy their time on the water."
                </p>
            </section>

            <section class="about-page__mission">
                <h2>"Our Mission"</h2>
                <p>
                    "To create a seamless platform that connects boat owners with the perfect docking spaces, enabling unforgettable maritime experiences while supporting local marina communities worldwide."
                </p>
            </section>

            <section class="about-page__values">
                <h2>"Our Values"</h2>
                <div class="value-grid">
                    {VALUES
                        .into_iter()
                        .map(|(icon, title, body)| {
                            view! {
                                <div class="value-card">
                                    <span class="value-card__icon" aria-hidden="true">{icon}</span>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-page__stats">
                <h2>"By the Numbers"</h2>
                <div class="stat-grid">
                    {STATS
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="stat-card">
                                    <strong>{number}</strong>
                                    <span>{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Set Sail?"</h2>
                <p>"Join thousands of boaters who trust DockNow for their docking needs."</p>
                <a class="btn btn--primary" href="/ports">"Browse ports"</a>
            </section>
        </div>
    }
}

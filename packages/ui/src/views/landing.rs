use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Adaptive Learning Paths",
        text: "Courses that follow your pace, from first steps to advanced topics.",
    },
    Feature {
        title: "Recognised Certificates",
        text: "Finish a course and take a certificate with you.",
    },
    Feature {
        title: "Expert Instructors",
        text: "Learn from teachers who work in the field they teach.",
    },
];

const CATEGORIES: &[&str] = &["Data Science", "Web Development", "Business Strategy"];

/// Public landing page. Also shown for unknown paths.
#[component]
pub fn LandingView(on_get_started: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "landing",
            section {
                class: "hero",
                h1 { "Learn without limits" }
                p {
                    class: "hero-text",
                    "SmartLearn brings courses, teachers and students together in one place."
                }
                div {
                    class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_get_started.call(()),
                        "Get Started"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }

            section {
                class: "features",
                h2 { "Why SmartLearn" }
                div {
                    class: "card-grid",
                    for feature in FEATURES {
                        div {
                            key: "{feature.title}",
                            class: "feature-card",
                            h3 { "{feature.title}" }
                            p { "{feature.text}" }
                        }
                    }
                }
            }

            section {
                class: "categories",
                h2 { "Popular Categories" }
                div {
                    class: "card-grid",
                    for category in CATEGORIES.iter().copied() {
                        div { key: "{category}", class: "category-card", "{category}" }
                    }
                }
            }

            section {
                class: "cta",
                h2 { "Ready to start?" }
                p { "Create a free student account and enroll in your first course today." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_get_started.call(()),
                    "Create an Account"
                }
            }
        }
    }
}

use maud::{html, Markup};

use crate::{names, views::components};

pub struct Stats {
    pub questions: usize,
    pub companies: usize,
    pub categories: usize,
}

fn stat_card(title: &str, value: usize, hint: &str) -> Markup {
    html! {
        article {
            header { (title) }
            div.stat-value { (value) }
            small { (hint) }
        }
    }
}

pub fn landing_page(stats: &Stats) -> Markup {
    html! {
        section {
            hgroup {
                h1 { "Prepare for Your Next Interview" }
                p {
                    "Access real interview questions from top companies. "
                    "Practice, learn, and land your dream job."
                }
            }
            div role="group" style="width: fit-content;" {
                a role="button" href=(names::CREATE_ACCOUNT_URL) { "Get started" }
                a role="button" class="outline" href=(names::SIGN_IN_URL) { "Sign in" }
            }
        }

        section.stats-grid {
            (stat_card("Total Questions", stats.questions, "Coding, design and behavioral"))
            (stat_card("Companies", stats.companies, "From startups to big tech"))
            (stat_card("Categories", stats.categories, "Question types to practise"))
        }
    }
}

struct DashboardCard {
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const DASHBOARD_CARDS: &[DashboardCard] = &[
    DashboardCard {
        title: "Practice Questions",
        description: "Access our collection of interview questions from various companies.",
        href: names::QUESTIONS_URL,
    },
    DashboardCard {
        title: "Browse Companies",
        description: "Explore questions and interview experiences from top tech companies.",
        href: names::COMPANIES_URL,
    },
    DashboardCard {
        title: "Contribute",
        description: "Share a question you were asked and help others prepare.",
        href: names::CONTRIBUTE_URL,
    },
];

pub fn dashboard() -> Markup {
    html! {
        hgroup {
            h1 { "Your Dashboard" }
            p { "Access all resources and start preparing for your interviews" }
        }
        div.card-grid {
            @for card in DASHBOARD_CARDS {
                article {
                    h3 { (components::nav_link(card.href, html! { (card.title) })) }
                    p { (card.description) }
                }
            }
        }
    }
}

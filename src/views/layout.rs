use maud::{html, Markup, DOCTYPE};

use crate::{names, utils, views::components};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn header(signed_in: bool) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li {
                        a.brand href=(if signed_in { names::DASHBOARD_URL } else { names::HOME_URL }) {
                            "InterviewPrep"
                        }
                    }
                }
                ul {
                    @if signed_in {
                        li { (components::nav_link(names::QUESTIONS_URL, html! { "Questions" })) }
                        li { (components::nav_link(names::COMPANIES_URL, html! { "Companies" })) }
                        li { (components::nav_link(names::CONTRIBUTE_URL, html! { "Contribute" })) }
                        li {
                            form method="post" action=(names::SIGN_OUT_URL) style="margin: 0;" {
                                button.secondary.outline type="submit" { "Sign out" }
                            }
                        }
                    } @else {
                        li { a href=(names::SIGN_IN_URL) { "Sign in" } }
                        li { a role="button" href=(names::CREATE_ACCOUNT_URL) { "Create account" } }
                    }
                    li.secondary { small { (utils::VERSION) } }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, signed_in: bool) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())

            title { (format!("{title} - InterviewPrep")) }
        }

        body."container" {
            (header(signed_in))
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - InterviewPrep" }
        (body)
    }
}

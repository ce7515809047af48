use maud::{html, Markup};

use crate::{models::Company, names, views::components};

pub fn company_list(companies: &[Company], query: &str) -> Markup {
    html! {
        hgroup {
            h1 { "Companies" }
            p { "Explore interview questions by company" }
        }
        form method="get" action=(names::COMPANIES_URL) {
            input type="search"
                  name="q"
                  value=(query)
                  placeholder="Search companies..."
                  aria-label="Search companies"
                  hx-get=(names::COMPANIES_URL)
                  hx-trigger="input changed delay:300ms, search"
                  hx-target="main"
                  hx-push-url="true";
        }
        @if companies.is_empty() {
            p { "No companies match your search." }
        }
        div.card-grid {
            @for company in companies {
                article {
                    header {
                        span style="font-size: 1.5rem; margin-right: 0.5rem;" { (company.logo) }
                        strong { (company.name) }
                    }
                    p { (company.question_count) " questions" }
                    (components::tags(&company.categories))
                }
            }
        }
    }
}

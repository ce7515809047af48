use maud::{html, Markup};

use crate::{
    models::{Difficulty, Question, QuestionType},
    names,
    services::questions::ListFilter,
    views::components,
};

fn filter_form(filter: &ListFilter) -> Markup {
    html! {
        form method="get"
             action=(names::QUESTIONS_URL)
             hx-get=(names::QUESTIONS_URL)
             hx-target="main"
             hx-push-url="true"
             hx-trigger="submit, change from:select" {
            fieldset role="group" {
                input type="search"
                      name="q"
                      value=(filter.query)
                      placeholder="Search questions, tags or companies..."
                      aria-label="Search";
                select name="difficulty" aria-label="Difficulty" {
                    option value="" { "Any difficulty" }
                    @for d in Difficulty::ALL {
                        option value=(d.as_str()) selected[filter.difficulty == Some(d)] { (d) }
                    }
                }
                select name="type" aria-label="Type" {
                    option value="" { "Any type" }
                    @for t in QuestionType::ALL {
                        option value=(t.as_str()) selected[filter.question_type == Some(t)] { (t) }
                    }
                }
                button type="submit" { "Search" }
            }
        }
    }
}

fn meta_badges(question: &Question) -> Markup {
    html! {
        (components::difficulty_badge(question.difficulty))
        @if let Some(ref company) = question.company {
            (components::badge(company))
        }
        @if let Some(t) = question.question_type {
            (components::badge(t.as_str()))
        }
        @if let (Some(position), Some(time)) = (&question.position, &question.time) {
            small { (position) " • " (time) }
        }
    }
}

fn solution(question: &Question) -> Markup {
    html! {
        @if question.is_programming() {
            (components::code_block(&question.solution, question.programming_language.as_deref()))
        } @else {
            (components::rich_text(&question.solution))
        }
    }
}

fn question_card(question: &Question) -> Markup {
    html! {
        article {
            header {
                h3 style="margin-bottom: 0.5rem;" {
                    (components::nav_link(&names::question_url(question.id()), html! { (question.title) }))
                }
                (meta_badges(question))
            }
            (components::rich_text(&question.description))
            div {
                (components::tags(&question.tags))
                @if let Some(ref estimated) = question.estimated_time {
                    small style="float: right;" { "⏱ " (estimated) }
                }
            }
            details {
                summary { "Show Solution" }
                (solution(question))
            }
        }
    }
}

pub fn question_list(questions: &[Question], filter: &ListFilter) -> Markup {
    html! {
        hgroup {
            h1 { "Interview Questions" }
            p { "Practice with real questions asked at top companies" }
        }
        (filter_form(filter))
        @if questions.is_empty() {
            p { "No questions match your search." }
        }
        @for question in questions {
            (question_card(question))
        }
    }
}

pub fn question_detail(question: &Question) -> Markup {
    let answer_heading = if question.question_type == Some(QuestionType::Behavioral) {
        "Answer"
    } else {
        "Solution"
    };

    html! {
        p { (components::nav_link(names::QUESTIONS_URL, html! { "← Back to Questions" })) }
        article {
            header {
                h1 { (question.title) }
                (meta_badges(question))
                @if let Some(ref estimated) = question.estimated_time {
                    small { " ⏱ " (estimated) }
                }
            }
            (components::rich_text(&question.description))
            (components::tags(&question.tags))
        }

        @if !question.test_cases.is_empty() {
            h2 { "Examples" }
            @for (idx, case) in question.test_cases.iter().enumerate() {
                article {
                    strong { "Example " (idx + 1) }
                    p { "Input: " code { (case.input) } }
                    p { "Output: " code { (case.output) } }
                    @if !case.explanation.is_empty() {
                        p { small { (case.explanation) } }
                    }
                }
            }
        }

        h2 { (answer_heading) }
        (solution(question))

        @if question.time_complexity.is_some() || question.space_complexity.is_some() {
            div.grid {
                @if let Some(ref time) = question.time_complexity {
                    article { header { "Time Complexity" } code { (time) } }
                }
                @if let Some(ref space) = question.space_complexity {
                    article { header { "Space Complexity" } code { (space) } }
                }
            }
        }

        @if let Some(ref explanation) = question.explanation {
            h2 { "Explanation" }
            (components::rich_text(explanation))
        }

        @if !question.related_topics.is_empty() {
            h3 { "Related Topics" }
            (components::tags(&question.related_topics))
        }
    }
}

pub fn question_not_found() -> Markup {
    html! {
        h1 { "Question not found" }
        p { (components::nav_link(names::QUESTIONS_URL, html! { "← Back to Questions" })) }
    }
}

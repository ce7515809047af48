use maud::{html, Markup};

use crate::{
    contribution::{ContributionForm, Field, FormMode, DIFFICULTY_FIELD, LANGUAGES, TYPE_FIELD},
    models::{Difficulty, QuestionType},
    names,
    views::components,
};

pub enum Notice {
    None,
    Submitted { id: String, title: String },
    MissingFields(Vec<Field>),
    /// Message from the submission sink, shown verbatim.
    Rejected(String),
}

impl Notice {
    fn invalid_fields(&self) -> &[Field] {
        match self {
            Notice::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

pub fn contribute_page(form: &ContributionForm, notice: &Notice) -> Markup {
    html! {
        hgroup {
            h1 { "Contribute a Question" }
            p { "Help others prepare by sharing your interview questions and experiences." }
        }
        @match notice {
            Notice::None => {}
            Notice::Submitted { id, title } => {
                article.notice-success {
                    "Thank you for contributing! "
                    strong { (title) }
                    " will be reviewed by our team. "
                    small { "Reference: " code { (id) } }
                }
            }
            Notice::MissingFields(_) => {
                p.notice-error { "Please fill in the required fields." }
            }
            Notice::Rejected(message) => {
                p.notice-error { (message) }
            }
        }
        (contribution_form(form, notice.invalid_fields()))
    }
}

fn text_input(
    form: &ContributionForm,
    field: Field,
    label: &str,
    placeholder: &str,
    invalid: &[Field],
) -> Markup {
    html! {
        label {
            (label)
            input type="text"
                  name=(field.name())
                  value=(form.get(field))
                  placeholder=(placeholder)
                  required[field.is_required()]
                  aria-invalid=[invalid.contains(&field).then_some("true")];
        }
    }
}

fn text_area(
    form: &ContributionForm,
    field: Field,
    label: &str,
    placeholder: &str,
    rows: u8,
    invalid: &[Field],
) -> Markup {
    html! {
        label {
            (label)
            textarea name=(field.name())
                     rows=(rows)
                     placeholder=(placeholder)
                     required[field.is_required()]
                     aria-invalid=[invalid.contains(&field).then_some("true")]
                     hx-post=(names::CONTRIBUTE_PREVIEW_URL)
                     hx-trigger="input changed delay:300ms"
                     hx-target="#preview"
                     hx-swap="innerHTML" {
                (form.get(field))
            }
        }
    }
}

fn type_select(form: &ContributionForm) -> Markup {
    html! {
        label {
            "Question Type"
            select name=(TYPE_FIELD)
                   hx-post=(names::CONTRIBUTE_FORM_URL)
                   hx-trigger="change"
                   hx-target="#contribute-form"
                   hx-swap="outerHTML" {
                option value="" selected[form.question_type().is_none()] { "Select a type" }
                @for t in QuestionType::ALL {
                    option value=(t.as_str()) selected[form.question_type() == Some(t)] { (t) }
                }
            }
        }
    }
}

fn difficulty_select(form: &ContributionForm) -> Markup {
    html! {
        label {
            "Difficulty"
            select name=(DIFFICULTY_FIELD) {
                @for d in Difficulty::ALL {
                    option value=(d.as_str()) selected[form.difficulty() == d] { (d) }
                }
            }
        }
    }
}

fn language_select(form: &ContributionForm, label: &str) -> Markup {
    let current = form.get(Field::ProgrammingLanguage);
    html! {
        label {
            (label)
            select name=(Field::ProgrammingLanguage.name()) {
                option value="" selected[current.is_empty()] { "Select a language" }
                @for lang in LANGUAGES {
                    option value=(lang) selected[current == *lang] { (lang) }
                }
                @if !current.is_empty() && !LANGUAGES.contains(&current) {
                    option value=(current) selected { (current) }
                }
            }
        }
    }
}

/// Values of fields the current mode hides, carried along so switching back
/// restores them.
fn hidden_values(form: &ContributionForm, mode: &FormMode) -> Markup {
    html! {
        @for field in Field::ALL {
            @if !mode.is_visible(field) && !form.get(field).is_empty() {
                input type="hidden" name=(field.name()) value=(form.get(field));
            }
        }
    }
}

pub fn contribution_form(form: &ContributionForm, invalid: &[Field]) -> Markup {
    let mode = form.mode();
    html! {
        form id="contribute-form"
             method="post"
             action=(names::CONTRIBUTE_URL)
             hx-post=(names::CONTRIBUTE_URL)
             hx-target="main"
             hx-swap="innerHTML" {
            (text_input(form, Field::Title, "Question Title", "e.g. Two Sum", invalid))

            div.grid {
                (type_select(form))
                (difficulty_select(form))
            }

            div.grid {
                (text_input(form, Field::Company, "Company", "e.g. Google", invalid))
                (text_input(form, Field::Position, "Position", "e.g. Software Engineer", invalid))
            }
            div.grid {
                (text_input(form, Field::Time, "When", "e.g. Sep 2024", invalid))
                (text_input(form, Field::EstimatedTime, "Estimated Time", "e.g. 15-20 min", invalid))
            }

            (text_input(form, Field::Tags, "Tags", "Comma-separated, e.g. array, hash table", invalid))

            @if let Some(label) = mode.language_label {
                (language_select(form, label))
            }

            (text_area(form, Field::Description, "Question Description", "Describe the question...", 4, invalid))
            (text_area(form, Field::Solution, mode.solution_label, mode.solution_placeholder, 8, invalid))

            @if mode.shows_complexity {
                div.grid {
                    (text_input(form, Field::TimeComplexity, "Time Complexity", "e.g. O(n)", invalid))
                    (text_input(form, Field::SpaceComplexity, "Space Complexity", "e.g. O(1)", invalid))
                }
            }

            (text_area(form, Field::Explanation, "Explanation (Optional)", "Walk through the reasoning...", 4, invalid))
            (hidden_values(form, &mode))

            h3 { "Preview" }
            div id="preview" class="preview" {
                (preview(form))
            }

            button type="submit" { "Submit Question" }
        }
    }
}

pub fn preview(form: &ContributionForm) -> Markup {
    let mode = form.mode();
    let description = form.get(Field::Description);
    let solution = form.get(Field::Solution);

    html! {
        @if description.trim().is_empty() && solution.trim().is_empty() {
            small { "The preview appears as you type. Wrap inline code in <code>...</code> tags." }
        } @else {
            @if !description.trim().is_empty() {
                strong { "Description" }
                (components::rich_text(description))
            }
            @if !solution.trim().is_empty() {
                strong { (mode.solution_label) }
                @if mode.shows_complexity {
                    (components::code_block(solution, Some(form.get(Field::ProgrammingLanguage)).filter(|l| !l.is_empty())))
                } @else {
                    (components::rich_text(solution))
                }
            }
            @if !form.live_tags().trim().is_empty() {
                small { "Tags: " (form.live_tags()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(form: &ContributionForm) -> String {
        contribution_form(form, &[]).into_string()
    }

    #[test]
    fn coding_mode_shows_language_and_complexity() {
        let mut form = ContributionForm::new();
        form.select_type(Some(QuestionType::Coding));
        let html = render(&form);

        assert!(html.contains("Programming Language"));
        assert!(html.contains(r#"name="time_complexity""#));
        assert!(html.contains("Write your solution here..."));
    }

    #[test]
    fn behavioral_mode_relabels_solution_and_hides_extras() {
        let mut form = ContributionForm::new();
        form.set(Field::TimeComplexity, "O(n)");
        form.select_type(Some(QuestionType::Behavioral));
        let html = render(&form);

        assert!(html.contains("Answer"));
        assert!(!html.contains("Programming Language"));
        assert!(!html.contains("Code Language"));
        assert!(html.contains(r#"<input type="hidden" name="time_complexity" value="O(n)">"#));
    }

    #[test]
    fn conceptual_mode_uses_code_language_label() {
        let mut form = ContributionForm::new();
        form.select_type(Some(QuestionType::Conceptual));
        let html = render(&form);

        assert!(html.contains("Code Language"));
        assert!(!html.contains(r#"name="space_complexity""#));
    }

    #[test]
    fn unlisted_language_stays_selected() {
        let mut form = ContributionForm::new();
        form.set(Field::ProgrammingLanguage, "c");
        form.select_type(Some(QuestionType::Conceptual));
        let html = render(&form);

        assert!(html.contains(r#"<option value="c" selected>c</option>"#));
        assert!(!html.contains(r#"<option value="" selected>"#));

        form.set(Field::ProgrammingLanguage, "rust");
        let html = render(&form);
        assert_eq!(html.matches(r#"value="rust""#).count(), 1);
    }

    #[test]
    fn required_inputs_are_marked() {
        let html = render(&ContributionForm::new());
        assert_eq!(html.matches("required").count(), 3);
    }

    #[test]
    fn preview_renders_inline_code() {
        let mut form = ContributionForm::new();
        form.set(Field::Description, "Call <code>len()</code> first");
        form.set(Field::Tags, "a, b ,");
        let html = preview(&form).into_string();

        assert!(html.contains("<code>len()</code>"));
        assert!(html.contains("Tags: a, b ,"));
    }
}

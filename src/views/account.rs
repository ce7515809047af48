use maud::{html, Markup};

use crate::names;

pub enum SignInState {
    NoError,
    EmptyFields,
    /// Message from the auth backend, shown verbatim.
    Failed(String),
}

pub fn sign_in(state: SignInState, email: &str) -> Markup {
    let error_msg = match state {
        SignInState::NoError => None,
        SignInState::EmptyFields => Some("Please enter your email and password.".to_string()),
        SignInState::Failed(message) => Some(message),
    };

    html! {
        hgroup {
            h1 { "Welcome back" }
            p { "Sign in to access interview questions and resources" }
        }
        article style="width: fit-content;" {
            form action=(names::SIGN_IN_URL) method="post" {
                label {
                    "Email address"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          value=(email)
                          placeholder="Enter your email";
                }
                label {
                    "Password"
                    @if let Some(ref msg) = error_msg {
                        input name="password"
                              type="password"
                              autocomplete="current-password"
                              required="true"
                              placeholder="Enter shared password"
                              aria-invalid="true";
                        small { (msg) }
                    } @else {
                        input name="password"
                              type="password"
                              autocomplete="current-password"
                              required="true"
                              placeholder="Enter shared password";
                    }
                }
                button type="submit" { "Sign in" }
            }
            p {
                "Don't have an account? "
                a href=(names::CREATE_ACCOUNT_URL) { "Create one" }
            }
        }
    }
}

pub enum CreateAccountState {
    NoError,
    EmptyFields,
    Failed(String),
}

pub fn create_account(state: CreateAccountState, username: &str, email: &str) -> Markup {
    let error_msg = match state {
        CreateAccountState::NoError => None,
        CreateAccountState::EmptyFields => {
            Some("Please choose a username and enter your email.".to_string())
        }
        CreateAccountState::Failed(message) => Some(message),
    };

    html! {
        hgroup {
            h1 { "Join the community" }
            p { "Create an account to start contributing" }
        }
        article style="width: fit-content;" {
            form action=(names::CREATE_ACCOUNT_URL) method="post" {
                label {
                    "Username"
                    input name="username"
                          type="text"
                          autocomplete="username"
                          required="true"
                          value=(username)
                          placeholder="Choose your username";
                }
                label {
                    "Email address"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          value=(email)
                          placeholder="Enter your email";
                }
                @if let Some(ref msg) = error_msg {
                    p.notice-error { (msg) }
                }
                button type="submit" { "Create Account" }
            }
            p {
                "Already have an account? "
                a href=(names::SIGN_IN_URL) { "Sign in" }
            }
        }
    }
}

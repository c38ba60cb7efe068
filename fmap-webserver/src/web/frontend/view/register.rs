use super::{field_error, page::*};
use fmap_core::usecases::forms::{FieldErrors, RegistrationForm};
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn register(
    flash: Option<FlashMessage>,
    form: &RegistrationForm,
    errors: Option<&FieldErrors>,
) -> Markup {
    page(
        "Register",
        None,
        flash,
        html! {
          form class="register" action="register" method="POST" {
              fieldset{
                label {
                    "Username:"
                    br;
                    input type="text" name="username" value=(form.username);
                }
                (field_error(errors, "username"))
                br;
                label {
                    "First name:"
                    br;
                    input type="text" name="first_name" value=(form.first_name);
                }
                (field_error(errors, "first_name"))
                br;
                label {
                    "eMail:"
                    br;
                    input type="email" name="email" value=(form.email);
                }
                (field_error(errors, "email"))
                br;
                label{
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                (field_error(errors, "password"))
                br;
                label{
                    "Repeat password:"
                    br;
                    input type="password" name="password2" placeholder="Repeat password";
                }
                (field_error(errors, "password2"))
                br;
                input type="submit" value="register";
              }
          }
        },
    )
}

pub fn register_done(username: &str) -> Markup {
    page(
        "Registration complete",
        None,
        None,
        html! {
            main {
                h2 { "Welcome, " (username) "!" }
                p {
                    "Your account has been created. "
                    a href="/login" { "Log in" }
                    " to start collecting places."
                }
            }
        },
    )
}

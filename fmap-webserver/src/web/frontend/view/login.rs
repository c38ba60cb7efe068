use super::page::*;
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Login",
        None,
        flash,
        html! {
          form class="login" action="login" method="POST" {
              fieldset{
                label {
                    "Username:"
                    br;
                    input type="text" name="username" placeholder="Username";
                }
                    br;
                label{
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                br;
                input type="submit" value="login";
                a href="/register" { "create an account" }
              }
          }
        },
    )
}

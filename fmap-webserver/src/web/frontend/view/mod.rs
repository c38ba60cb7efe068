use maud::{html, Markup};

use fmap_core::usecases::forms::FieldErrors;

mod edit;
mod history;
mod login;
mod news;
mod page;
mod place;
mod register;
mod wishlist;

pub use edit::*;
pub use history::*;
pub use login::*;
pub use news::*;
use page::*;
pub use place::*;
pub use register::*;
pub use wishlist::*;

pub fn about(username: Option<&str>) -> Markup {
    page(
        "About | foodmap",
        username,
        None,
        html! {
            main {
                h2 { "About foodmap" }
                p {
                    "foodmap helps you discover places to eat and drink, collect
                     the ones you still want to visit in a wishlist and keep a
                     history of the ones you already did."
                }
                p {
                    "Browse the " a href="/places" { "places" }
                    ", read the " a href="/" { "news" }
                    " and start your own list."
                }
            }
        },
    )
}

fn field_error(errors: Option<&FieldErrors>, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.and_then(|e| e.message_for(field)) {
            span class="field-error" { (msg) }
        }
    }
}

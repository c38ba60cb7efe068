use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    username: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body {
            (flash_msg(flash))
            (header(username))
            (content)
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(username: Option<&str>) -> Markup {
    html! {
    header {
        nav {
            a href="/" { "news" }
            a href="/places" { "places" }
            a href="/about" { "about" }
        }
        @if let Some(username) = username {
            div class="msg" { "You are logged in as " span class="username" { (username) } }
            nav {
                a href="/wishlist" { "wishlist" }
                a href="/history" { "history" }
                a href="/add_history" { "add visit" }
                a href="/edit" { "profile" }
                form class="logout" action="/logout" method="POST" {
                    input type="submit" value="logout";
                }
            }
        }
        @ else {
            nav {
                a href="/login"  { "login" }
                a href="/register" { "register" }
            }
        }
    }
    }
}

pub fn pager_nav(base_url: &str, number: usize, page_count: usize) -> Markup {
    html! {
        @if page_count > 1 {
            nav class="pager" {
                @if number > 1 {
                    a href=(format!("{base_url}?page={}", number - 1)) { "previous" }
                }
                span { (format!("page {number} of {page_count}")) }
                @if number < page_count {
                    a href=(format!("{base_url}?page={}", number + 1)) { "next" }
                }
            }
        }
    }
}

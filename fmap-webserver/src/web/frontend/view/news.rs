use super::page::*;
use fmap_core::{entities::NewsArticle, util::pagination::Page};
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn news_list(
    username: Option<&str>,
    flash: Option<FlashMessage>,
    news: &Page<NewsArticle>,
) -> Markup {
    page(
        "News | foodmap",
        username,
        flash,
        html! {
            main {
                h1 { "Latest news" }
                @if news.items.is_empty() {
                    p { "No news yet." }
                } @else {
                    ul class="news-list" {
                        @for article in &news.items {
                            li {
                                h3 {
                                    a href=(format!("/news/{}", article.id)) { (article.title) }
                                }
                                p class="pub-date" { (article.published_at) }
                            }
                        }
                    }
                }
                (pager_nav("/", news.number, news.page_count))
            }
        },
    )
}

pub fn news_detail(username: Option<&str>, article: &NewsArticle) -> Markup {
    page(
        &format!("{} | foodmap", article.title),
        username,
        None,
        html! {
            main {
                h2 { (article.title) }
                p class="pub-date" { (article.published_at) }
                @if let Some(ref url) = article.image_url {
                    img src=(url) alt=(article.title);
                }
                p { (article.body) }
            }
        },
    )
}

use super::page::*;
use fmap_core::{entities::Place, util::pagination::Page};
use maud::{html, Markup};

pub fn wishlist(username: &str, wishlist: &Page<Place>) -> Markup {
    page(
        "Wishlist | foodmap",
        Some(username),
        None,
        html! {
            main {
                h1 { "Your wishlist" }
                @if wishlist.items.is_empty() {
                    p {
                        "Your wishlist is empty. Find a "
                        a href="/places" { "place" }
                        " you would like to visit."
                    }
                } @else {
                    ul class="place-list" {
                        @for place in &wishlist.items {
                            li {
                                h3 {
                                    a href=(format!("/places/{}", place.id)) { (place.name) }
                                }
                                p class="location" { (place.location) }
                            }
                        }
                    }
                }
                (pager_nav("/wishlist", wishlist.number, wishlist.page_count))
            }
        },
    )
}

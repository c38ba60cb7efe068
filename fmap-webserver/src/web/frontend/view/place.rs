use super::page::*;
use fmap_core::{
    entities::Place,
    usecases::{PlaceDetails, PlaceListing},
};
use maud::{html, Markup};

pub fn places_list(username: Option<&str>, listing: &PlaceListing) -> Markup {
    let title = match &listing.tag {
        Some(tag) => format!("Places tagged #{} | foodmap", tag.label),
        None => "Places | foodmap".to_string(),
    };
    let base_url = match &listing.tag {
        Some(tag) => format!("/place/{}", tag.slug),
        None => "/places".to_string(),
    };
    page(
        &title,
        username,
        None,
        html! {
            main {
                @if let Some(ref tag) = listing.tag {
                    h1 { "Places tagged " span class="tag" { (format!("#{}", tag.label)) } }
                } @else {
                    h1 { "Places" }
                }
                @if listing.page.items.is_empty() {
                    p { "No places found." }
                } @else {
                    ul class="place-list" {
                        @for place in &listing.page.items {
                            li { (place_result(place)) }
                        }
                    }
                }
                (pager_nav(&base_url, listing.page.number, listing.page.page_count))
            }
        },
    )
}

fn place_result(place: &Place) -> Markup {
    html! {
        h3 {
            a href=(format!("/places/{}", place.id)) { (place.name) }
        }
        p { (place.description) }
        p class="location" { (place.location) }
    }
}

pub fn place_detail(username: Option<&str>, details: &PlaceDetails) -> Markup {
    let PlaceDetails {
        place,
        place_type,
        tags,
        menu_images,
        map_location,
        is_favourite,
    } = details;
    page(
        &format!("{} | foodmap", place.name),
        username,
        None,
        html! {
            main {
                h2 { (place.name) }
                @if let Some(ref url) = place.image_url {
                    img src=(url) alt=(place.name);
                }
                p { (place.description) }
                p {
                    table {
                        tr {
                            td { "Type" }
                            td { (place_type.name) }
                        }
                        tr {
                            td { "Location" }
                            td { (place.location) }
                        }
                        tr {
                            td { "Work hours" }
                            td { (place.work_hours) }
                        }
                    }
                }
                @if !tags.is_empty() {
                    ul class="tags" {
                        @for tag in tags {
                            li {
                                a href=(format!("/place/{}", tag.slug)) { (format!("#{}", tag.label)) }
                            }
                        }
                    }
                }
                @if !menu_images.is_empty() {
                    h3 { "Menu" }
                    ul class="menu-images" {
                        @for image in menu_images {
                            @if let Some(ref url) = image.image_url {
                                li { img src=(url) alt="menu"; }
                            }
                        }
                    }
                }
                @if let Some(location) = map_location {
                    div class="map" { (location.map_location) }
                }
                @if username.is_some() {
                    form class="favourite" action=(format!("/favourite/{}", place.id)) method="POST" {
                        input type="hidden" name="restaurant_id" value=(place.id);
                        @if *is_favourite {
                            input type="submit" value="remove from wishlist";
                        } @else {
                            input type="submit" value="add to wishlist";
                        }
                    }
                }
            }
        },
    )
}

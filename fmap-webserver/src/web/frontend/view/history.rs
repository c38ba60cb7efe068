use super::{field_error, page::*};
use fmap_core::{
    entities::{format_date, Place, VisitRecord},
    usecases::forms::{FieldErrors, VisitForm},
    util::pagination::Page,
};
use maud::{html, Markup};

pub fn history_list(username: &str, history: &Page<(VisitRecord, Place)>) -> Markup {
    page(
        "History | foodmap",
        Some(username),
        None,
        html! {
            main {
                h1 { "Visited places" }
                @if history.items.is_empty() {
                    p { "You have not recorded any visits yet." }
                } @else {
                    table class="history" {
                        thead {
                            tr {
                                th { "Place"   }
                                th { "Date"    }
                                th { "Comment" }
                            }
                        }
                        tbody {
                            @for (visit, place) in &history.items {
                                tr {
                                    td {
                                        a href=(format!("/places/{}", place.id)) { (place.name) }
                                    }
                                    td { (format_date(visit.visited_on)) }
                                    td {
                                        @if let Some(ref comment) = visit.comment {
                                            (comment)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                (pager_nav("/history", history.number, history.page_count))
            }
        },
    )
}

pub fn add_history(
    username: &str,
    places: &[Place],
    form: &VisitForm,
    errors: Option<&FieldErrors>,
) -> Markup {
    page(
        "Add visit | foodmap",
        Some(username),
        None,
        html! {
            main {
                h2 { "Add a visit" }
                @if errors.is_some() {
                    div class="form-error" { "Please check the data you entered." }
                }
                form class="add-history" action="/add_history" method="POST" {
                    fieldset {
                        label {
                            "Place:"
                            br;
                            select name="place_id" {
                                option value="" { "Choose a place" }
                                @for place in places {
                                    option value=(place.id) selected[form.place_id == place.id.as_str()] {
                                        (place.name)
                                    }
                                }
                            }
                        }
                        (field_error(errors, "place_id"))
                        br;
                        label {
                            "Date of visit:"
                            br;
                            input type="text" name="visited_on" value=(form.visited_on) placeholder="YYYY-MM-DD";
                        }
                        (field_error(errors, "visited_on"))
                        br;
                        label {
                            "Comment:"
                            br;
                            textarea name="comment" placeholder="Notes for yourself (optional)" {
                                (form.comment)
                            }
                        }
                        (field_error(errors, "comment"))
                        br;
                        input type="submit" value="save";
                    }
                }
            }
        },
    )
}

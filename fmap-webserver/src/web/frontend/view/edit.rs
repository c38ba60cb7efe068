use super::{field_error, page::*};
use fmap_core::usecases::forms::{FieldErrors, ProfileForm};
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn edit_profile(
    username: &str,
    flash: Option<FlashMessage>,
    form: &ProfileForm,
    errors: Option<&FieldErrors>,
) -> Markup {
    page(
        "Edit profile | foodmap",
        Some(username),
        flash,
        html! {
            main {
                h2 { "Edit your profile" }
                form class="edit" action="/edit" method="POST" {
                    fieldset {
                        label {
                            "First name:"
                            br;
                            input type="text" name="first_name" value=(form.first_name);
                        }
                        (field_error(errors, "first_name"))
                        br;
                        label {
                            "Last name:"
                            br;
                            input type="text" name="last_name" value=(form.last_name);
                        }
                        (field_error(errors, "last_name"))
                        br;
                        label {
                            "eMail:"
                            br;
                            input type="email" name="email" value=(form.email);
                        }
                        (field_error(errors, "email"))
                        br;
                        input type="submit" value="save";
                    }
                }
            }
        },
    )
}

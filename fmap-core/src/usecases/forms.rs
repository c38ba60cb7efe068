//! Structured validation of user-submitted forms.
//!
//! One validation function per form. Each either returns the typed
//! value the form encodes or the set of field-level errors to show
//! next to the inputs.

use crate::{
    entities::*,
    util::validate::{is_valid_email, is_valid_username},
};

use super::{edit_profile::ProfileUpdate, record_visit::NewVisit, register::NewUser};

pub const COMMENT_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// Registration input as submitted by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegistrationForm {
    /// Field-level validation.
    ///
    /// Uniqueness of the username is not checked here, it belongs
    /// to the user repository.
    pub fn validate(self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::default();
        let username = self.username.trim();
        if !is_valid_username(username) {
            errors.add("username", "Enter a valid username.");
        }
        let email = self
            .email
            .trim()
            .parse::<EmailAddress>()
            .ok()
            .filter(|e| is_valid_email(e.as_str()));
        if email.is_none() {
            errors.add("email", "Enter a valid email address.");
        }
        if self.password.len() < Password::min_len() {
            errors.add("password", "The password is too short.");
        }
        if self.password != self.password2 {
            errors.add("password2", "Passwords don't match.");
        }
        match email {
            Some(email) if errors.is_empty() => Ok(NewUser {
                username: username.to_string(),
                first_name: self.first_name.trim().to_string(),
                email,
                password: self.password,
            }),
            _ => Err(errors),
        }
    }
}

/// Profile edit input as submitted by the user.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = self
            .email
            .trim()
            .parse::<EmailAddress>()
            .ok()
            .filter(|e| is_valid_email(e.as_str()));
        if email.is_none() {
            errors.add("email", "Enter a valid email address.");
        }
        match email {
            Some(email) if errors.is_empty() => Ok(ProfileUpdate {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email,
            }),
            _ => Err(errors),
        }
    }
}

/// Visit history entry input as submitted by the user.
#[derive(Debug, Clone, Default)]
pub struct VisitForm {
    pub place_id: String,
    pub visited_on: String,
    pub comment: String,
}

impl VisitForm {
    pub fn validate(self) -> Result<NewVisit, FieldErrors> {
        let mut errors = FieldErrors::default();
        let place_id = self.place_id.trim();
        if place_id.is_empty() {
            errors.add("place_id", "Choose a place.");
        }
        let visited_on = parse_date(&self.visited_on).ok();
        if visited_on.is_none() {
            errors.add("visited_on", "Enter the visit date as YYYY-MM-DD.");
        }
        if self.comment.len() > COMMENT_MAX_LEN {
            errors.add("comment", "The comment is too long.");
        }
        let comment = self.comment.trim();
        match visited_on {
            Some(visited_on) if errors.is_empty() => Ok(NewVisit {
                place_id: place_id.into(),
                visited_on,
                comment: if comment.is_empty() {
                    None
                } else {
                    Some(comment.to_string())
                },
            }),
            _ => Err(errors),
        }
    }
}

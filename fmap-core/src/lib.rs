//! # fmap-core
//!
//! Repository traits and use cases of foodmap.

pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use fmap_entities::{
        email::*, history::*, id::*, location::*, menu::*, news::*, password::*, place::*, tag::*,
        time::*, user::*,
    };
}

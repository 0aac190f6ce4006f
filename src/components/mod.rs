//! Page components.

pub mod about;
pub mod back_to_top;
pub mod contact;
pub mod navbar;
pub mod particle_field;
pub mod projects;
pub mod reveal;
pub mod section;
pub mod skills;
pub mod stats;

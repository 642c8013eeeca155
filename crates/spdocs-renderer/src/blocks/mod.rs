//! Stateless content blocks.

mod badge;
mod details;

pub use badge::BadgeDirective;
pub use details::DetailsDirective;

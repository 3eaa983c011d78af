//! Server-rendered HTML for the site.
//!
//! Pages are built with maud; styling and behaviour are inlined from
//! [`assets`] so the page is a single response.

pub mod assets;
pub mod components;
pub mod home;

pub use home::home_page;

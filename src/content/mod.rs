//! Content tree sections and the listing service
//!
//! One module per site section, each with its index container and child
//! page type. The listing behavior shared by all of them lives in
//! [`service`].

pub mod blog;
pub mod galleries;
pub mod printshop;
pub mod processes;
pub mod service;

pub use blog::{BlogCategory, BlogIndex, BlogPost};
pub use galleries::{GalleriesIndex, GalleryImage, GalleryPage};
pub use printshop::{PrintshopIndex, PrintshopItem};
pub use processes::{ProcessPage, ProcessesIndex};
pub use service::{Scope, list_section};

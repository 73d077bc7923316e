//! Look up and slice Material Design icons out of packed atlas sheets.
//!
//! An icon set ships as a handful of static files: sprite sheets holding
//! hundreds of fixed-size icons, plus JSON mappings documents naming every
//! icon and its pixel offset. This crate parses and indexes the mappings so
//! icons can be found by name or category, then copies individual icons out
//! of a sheet on demand. That is everything a tool needs to decorate its UI
//! with named icons, and nothing that renders.
//!
//! # Quick start
//!
//! ```no_run
//! use icon_atlas::{AtlasFiles, IconVariant};
//! use std::path::Path;
//!
//! let library = AtlasFiles::in_dir(Path::new("res/icons")).load().unwrap();
//!
//! let home: Option<image::RgbaImage> = library.find_icon("home", IconVariant::default());
//!
//! println!("home icon is {:?} pixels", home.unwrap().dimensions())
//! ```
//!
//! The icon names are the ones from the Material Icons list; browse them at
//! [MATERIAL_ICONS_URL].
//!
//! # High level design
//!
//! Getting from files on disk to an icon image is a staged procedure, and
//! depending on your use case, you might want to stop at any one of the
//! stages. The crate is laid out to allow exactly that, befitting those who
//! need one icon once but also those who drive a searchable browser over the
//! whole set.
//!
//! 1.  *Parsing mappings*:
//!
//!     A mappings document describes one scale of the icon set: how large
//!     each sheet's icons are and where each named icon sits. [Mappings::parse]
//!     turns the JSON text into that structure and does nothing else.
//!
//! 2.  *Indexing*:
//!
//!     Queries want maps, not nested arrays. [IconIndex] is built once from
//!     a parsed document and answers name, category and search queries
//!     without touching pixels.
//!
//! 3.  *Slicing*:
//!
//!     [extract_icon] copies one icon's square out of its sheet into an
//!     owned image. This is the only stage that handles pixel data.
//!
//! 4.  *The assembled library*:
//!
//!     [IconLibrary] owns the mappings and all four sheet variants (black
//!     and white, regular and doubled size), builds indexes lazily, and
//!     resolves a name plus an [IconVariant] straight to an image.
//!     [IconCache] sits on top for callers that request the same icons
//!     every frame.

mod extract;
mod index;
mod library;
mod mappings;

pub use extract::*;
pub use index::*;
pub use library::*;
pub use mappings::*;

/// External URL to the Material Icons browser from Google Fonts.
pub const MATERIAL_ICONS_URL: &str = "https://fonts.google.com/icons?icon.set=Material+Icons";

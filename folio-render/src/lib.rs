//! `Folio` Render — HTML generation for portfolio sites
//!
//! Turns loaded records into cards, lays the cards out in a fixed-column
//! grid and wraps everything in full HTML pages. Rendering is pure apart
//! from asset existence checks, which go through [`assets::AssetStore`].

pub mod assets;
pub mod card;
pub mod error;
pub mod escape;
pub mod filter;
pub mod grid;
pub mod page;

#[cfg(test)]
mod testing;

pub use assets::{AssetStore, DirAssets};
pub use card::{Card, CardImage, CardLink, build_cards};
pub use error::AssetMissing;
pub use filter::ShowcaseFilter;
pub use grid::Grid;
pub use page::{Notice, PageContext, RenderedPage, Routes};

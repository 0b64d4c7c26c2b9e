//! Typed shapes for the playlist-listing responses of the Spotify Web API.
//!
//! The crate does not talk to the network. Callers hand it a response body
//! they fetched elsewhere and get back a [`PlaylistCollection`].

pub mod config;
pub mod error;
pub mod models;

pub use error::{PlaylistsError, Result};
pub use models::external_links::ExternalLinks;
pub use models::image::Image;
pub use models::owner::{FollowerCount, Owner};
pub use models::playlist::{PlaylistCollection, PlaylistSummary, TrackSummary};

pub mod external_links;
pub mod image;
pub mod owner;
pub mod playlist;

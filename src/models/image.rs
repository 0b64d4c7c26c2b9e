use serde::{Deserialize, Serialize};

/// One artwork rendition. The API leaves the dimensions `null` for
/// user-uploaded covers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl Image {
    pub fn area(&self) -> Option<u64> {
        Some(u64::from(self.height?) * u64::from(self.width?))
    }
}

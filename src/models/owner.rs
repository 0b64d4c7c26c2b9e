use serde::{Deserialize, Serialize};

use crate::models::external_links::ExternalLinks;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FollowerCount {
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Owner {
    pub external_urls: ExternalLinks,
    pub followers: FollowerCount,
    pub href: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_tag_is_renamed() {
        let value = json!({
            "external_urls": { "spotify": "https://open.example/user/u1" },
            "followers": { "href": null, "total": 5 },
            "href": "https://api.example/v1/users/u1",
            "id": "u1",
            "type": "user",
            "uri": "spotify:user:u1",
            "display_name": "Alex"
        });
        let owner: Owner = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(owner.kind, "user");
        assert_eq!(owner.followers.href, None);
        assert_eq!(owner.followers.total, 5);
        assert_eq!(serde_json::to_value(&owner).unwrap(), value);
    }

    #[test]
    fn follower_total_is_required() {
        let result = serde_json::from_value::<FollowerCount>(json!({ "href": null }));
        assert!(result.is_err());
    }
}

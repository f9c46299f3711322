//! Best-effort avatar thumbnail lookup.

use serde::Deserialize;

use crate::service::roblox::RobloxClient;

#[derive(Debug, Deserialize)]
struct ThumbnailPage {
    data: Vec<Thumbnail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Thumbnail {
    image_url: Option<String>,
}

impl RobloxClient {
    /// Returns the avatar thumbnail URL for a user, or `None` when the lookup
    /// fails for any reason.
    ///
    /// The lookup decorates notifications and must never fail a delivery;
    /// failures are logged and swallowed here so callers can substitute a
    /// default image.
    pub async fn avatar_url(&self, user_id: u64) -> Option<String> {
        match self.fetch_avatar_url(user_id).await {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Failed to fetch avatar for user {}: {}", user_id, e);
                None
            }
        }
    }

    async fn fetch_avatar_url(&self, user_id: u64) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/v1/users/avatar", self.thumb_base);

        let page = self
            .http
            .get(&url)
            .query(&[
                ("userIds", user_id.to_string().as_str()),
                ("size", "150x150"),
                ("format", "Png"),
            ])
            .send()
            .await?
            .json::<ThumbnailPage>()
            .await?;

        Ok(page.data.into_iter().next().and_then(|t| t.image_url))
    }
}

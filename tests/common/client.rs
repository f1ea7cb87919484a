//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server route. Redirects are not followed,
//! so tests can assert on the 303 responses of form submissions.
//!
//! When routes or form fields change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::redirect::Policy;
use reqwest::Response;
use std::time::Duration;

/// Album form fields, named as the HTML forms name them
pub struct AlbumForm<'a> {
    pub album_name: &'a str,
    pub artist_name: &'a str,
    pub genre: &'a str,
    pub rating: &'a str,
}

impl AlbumForm<'_> {
    fn pairs(&self) -> [(&str, &str); 4] {
        [
            ("albumName", self.album_name),
            ("artistName", self.artist_name),
            ("genre", self.genre),
            ("rating", self.rating),
        ]
    }
}

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Fetches a JSON route and decodes it, asserting a 200 first
    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self.get(path).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK, "GET {}", path);
        response.json().await.expect("Invalid JSON body")
    }

    // ========================================================================
    // Collection
    // ========================================================================

    pub async fn get_collection(&self) -> Response {
        self.get("/collection").await
    }

    pub async fn create_album(&self, form: &AlbumForm<'_>) -> Response {
        self.client
            .post(self.url("/collection"))
            .form(&form.pairs())
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn update_album(&self, id: &str, form: &AlbumForm<'_>) -> Response {
        self.client
            .put(self.url(&format!("/collection/{}", id)))
            .form(&form.pairs())
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn delete_album(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/collection/{}", id)))
            .send()
            .await
            .expect("Request failed")
    }

    /// Posts to a route with `?_method=`, the way an HTML form does
    pub async fn post_with_method_override(
        &self,
        path: &str,
        method: &str,
        form: Option<&AlbumForm<'_>>,
    ) -> Response {
        let request = self
            .client
            .post(self.url(&format!("{}?_method={}", path, method)));
        let request = match form {
            Some(form) => request.form(&form.pairs()),
            None => request,
        };
        request.send().await.expect("Request failed")
    }

    // ========================================================================
    // Artists
    // ========================================================================

    pub async fn get_artists(&self) -> Response {
        self.get("/artists").await
    }

    pub async fn delete_artist(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/artists/{}", id)))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub async fn get_best_albums(&self, min_rating: Option<i64>) -> Response {
        match min_rating {
            Some(min) => self.get(&format!("/bestAlbums?min_rating={}", min)).await,
            None => self.get("/bestAlbums").await,
        }
    }

    pub async fn get_view_info(&self, id: &str) -> Response {
        self.get(&format!("/viewInfo/{}", id)).await
    }

    pub async fn get_edit_info(&self, id: &str) -> Response {
        self.get(&format!("/editInfo/{}", id)).await
    }

    pub async fn get_show_artist(&self, id: &str) -> Response {
        self.get(&format!("/showArtist/{}", id)).await
    }

    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }
}

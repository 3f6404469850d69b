// TMDB-backed catalog client

use async_trait::async_trait;
use log::debug;

use crate::config::TmdbConfig;

use super::client::CatalogClient;
use super::error::{CatalogError, CatalogResult};
use super::models::{Movie, MovieDetails, MovieListResponse};

/// [`CatalogClient`] speaking the TMDB v3 REST API.
///
/// Authentication is the `api_key` query parameter on every request.
/// Anything outside 2xx maps to [`CatalogError::Unavailable`], except a
/// 404 on a movie lookup, which is [`CatalogError::NotFound`].
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get_movie_list(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> CatalogResult<Vec<Movie>> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "catalog answered {}",
                response.status()
            )));
        }
        let list: MovieListResponse = response.json().await?;
        Ok(list.results)
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn search_movies(&self, query: &str) -> CatalogResult<Vec<Movie>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.get_movie_list("search/movie", &[("query", query), ("page", "1")])
            .await
    }

    async fn movie_details(&self, movie_id: u64) -> CatalogResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.base_url, movie_id);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(movie_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "catalog answered {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn popular_movies(&self, page: u32) -> CatalogResult<Vec<Movie>> {
        let page = page.to_string();
        self.get_movie_list("movie/popular", &[("page", page.as_str())])
            .await
    }
}

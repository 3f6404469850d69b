// Catalog response shapes

use serde::{Deserialize, Serialize};

/// One movie as the catalog lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// Extra fields the catalog returns for a single-movie lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Envelope TMDB wraps every movie listing in.
#[derive(Debug, Deserialize)]
pub(crate) struct MovieListResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_decodes_with_null_artwork() {
        let raw = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": null,
            "overview": "A hacker learns the truth.",
            "release_date": "1999-03-31",
            "vote_average": 8.2
        }"#;

        let movie: Movie = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.id, 603);
        assert!(movie.poster_path.is_none());
        assert!(movie.backdrop_path.is_none());
        assert_eq!(movie.release_date.as_deref(), Some("1999-03-31"));
    }

    #[test]
    fn test_details_flatten_the_listing_fields() {
        let raw = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/p.jpg",
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}],
            "runtime": 136,
            "status": "Released",
            "tagline": "Free your mind."
        }"#;

        let details: MovieDetails = serde_json::from_str(raw).unwrap();
        assert_eq!(details.movie.title, "The Matrix");
        assert_eq!(details.genres[0].name, "Action");
        assert_eq!(details.runtime, Some(136));
    }

    #[test]
    fn test_list_envelope_tolerates_missing_results() {
        let list: MovieListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.results.is_empty());
    }
}

// Artwork URL helpers

/// Stock film image shown when a movie has no poster of its own.
const FALLBACK_POSTER: &str =
    "https://images.pexels.com/photos/390089/film-movie-motion-picture-390089.jpeg?auto=compress&cs=tinysrgb&w=400";
const FALLBACK_BACKDROP: &str =
    "https://images.pexels.com/photos/390089/film-movie-motion-picture-390089.jpeg?auto=compress&cs=tinysrgb&w=1260";

/// Poster renditions the image CDN serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W185,
    W342,
    W500,
    Original,
}

impl PosterSize {
    fn segment(self) -> &'static str {
        match self {
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

impl Default for PosterSize {
    fn default() -> Self {
        Self::W342
    }
}

/// Backdrop renditions the image CDN serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropSize {
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    fn segment(self) -> &'static str {
        match self {
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }
}

impl Default for BackdropSize {
    fn default() -> Self {
        Self::W1280
    }
}

/// Full poster URL for `path`, or a stock placeholder when there is none.
///
/// `image_base_url` comes from config; `path` is the slash-prefixed value
/// the catalog returns.
pub fn poster_url(image_base_url: &str, path: Option<&str>, size: PosterSize) -> String {
    match path {
        Some(path) => format!("{}/{}{}", image_base_url, size.segment(), path),
        None => FALLBACK_POSTER.to_string(),
    }
}

/// Full backdrop URL for `path`, or a wide stock placeholder.
pub fn backdrop_url(image_base_url: &str, path: Option<&str>, size: BackdropSize) -> String {
    match path {
        Some(path) => format!("{}/{}{}", image_base_url, size.segment(), path),
        None => FALLBACK_BACKDROP.to_string(),
    }
}

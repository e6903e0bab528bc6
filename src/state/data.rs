/// Shared data structures for the picker
///
/// These structs represent the catalog entries that flow from the
/// catalog file to the UI layer. They are immutable once loaded.
use serde::Deserialize;
use std::path::PathBuf;

/// A single movie in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub poster: Poster,
    pub description: String,
    /// Genre tags in display order (duplicates allowed)
    #[serde(alias = "genre")]
    pub genres: Vec<String>,
    pub ratings: Ratings,
}

/// Three independently sourced scores, never cross-checked
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    /// IMDb score (0.0 to 10.0)
    pub imdb: f32,
    /// Kinopoisk score (0.0 to 10.0)
    pub kinopoisk: f32,
    /// Rotten Tomatoes score (0 to 100)
    pub rotten_tomatoes: u8,
}

impl Ratings {
    pub fn imdb_label(&self) -> String {
        format!("{}", self.imdb)
    }

    pub fn kinopoisk_label(&self) -> String {
        format!("{}", self.kinopoisk)
    }

    pub fn rotten_tomatoes_label(&self) -> String {
        format!("{}%", self.rotten_tomatoes)
    }
}

/// Where a poster image lives
///
/// Stored as a plain string in catalog files. Remote posters are never
/// fetched; only their requested dimensions are read from the URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Poster {
    Remote {
        url: String,
        /// `w` query parameter, if numeric
        width: Option<u32>,
        /// `h` query parameter, if numeric
        height: Option<u32>,
    },
    Local(PathBuf),
}

impl Poster {
    pub fn parse(reference: &str) -> Self {
        if !(reference.starts_with("http://") || reference.starts_with("https://")) {
            return Poster::Local(PathBuf::from(reference));
        }

        let mut width = None;
        let mut height = None;

        if let Some((_, query)) = reference.split_once('?') {
            // Fragment is not part of the query
            let query = query.split('#').next().unwrap_or_default();
            for pair in query.split('&') {
                match pair.split_once('=') {
                    Some(("w", value)) => width = value.parse().ok(),
                    Some(("h", value)) => height = value.parse().ok(),
                    _ => {}
                }
            }
        }

        Poster::Remote {
            url: reference.to_string(),
            width,
            height,
        }
    }

    /// Requested dimensions of a remote poster, when both are known
    pub fn requested_size(&self) -> Option<(u32, u32)> {
        match self {
            Poster::Remote {
                width: Some(w),
                height: Some(h),
                ..
            } => Some((*w, *h)),
            _ => None,
        }
    }
}

impl From<String> for Poster {
    fn from(reference: String) -> Self {
        Poster::parse(&reference)
    }
}

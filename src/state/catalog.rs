use std::path::Path;

use super::data::Movie;
use crate::error::{Error, Result};

/// Catalog shipped inside the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The Catalog holds every movie available for picking.
/// It is loaded once at startup and never changes afterwards.
/// A Catalog is never empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog from a list of movies.
    /// Fails if the list is empty.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Catalog { movies })
    }

    /// The five sample movies embedded at compile time
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of movies
    pub fn from_json(json: &str) -> Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), movies = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

//! Favorites service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::favorite::{CreateFavorite, NewFavorite},
    repository::{Lookups, Procedures},
};

use super::resolver::LookupResolver;

#[derive(Clone)]
pub struct FavoritesService {
    resolver: LookupResolver,
    procedures: Arc<dyn Procedures>,
}

impl FavoritesService {
    pub fn new(lookups: Arc<dyn Lookups>, procedures: Arc<dyn Procedures>) -> Self {
        Self {
            resolver: LookupResolver::new(lookups),
            procedures,
        }
    }

    pub async fn add_favorite(&self, favorite: CreateFavorite) -> AppResult<NewFavorite> {
        let (book_id, member_id) = self
            .resolver
            .resolve_pair(&favorite.book, &favorite.member)
            .await?;

        let new_favorite = NewFavorite { book_id, member_id };
        self.procedures.add_to_favorites(&new_favorite).await?;
        Ok(new_favorite)
    }
}

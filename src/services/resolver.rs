//! Resolution of human-facing names to surrogate keys
//!
//! Every write endpoint names its book by title and its member by name.
//! This is the one place that decides what happens when a name matches
//! nothing or more than one row.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{error::AppError, repository::Lookups};

/// Entities that can be looked up by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Member,
}

impl EntityKind {
    fn noun(self) -> &'static str {
        match self {
            EntityKind::Book => "book",
            EntityKind::Member => "member",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Book => f.write_str("Book"),
            EntityKind::Member => f.write_str("Member"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("More than one {} matches {name:?}", .kind.noun())]
    Ambiguous { kind: EntityKind, name: String },

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        let message = err.to_string();
        match err {
            // Surfaced as a validation failure of the request, e.g. "Book not found"
            ResolveError::NotFound(_) => AppError::Validation(message),
            ResolveError::Ambiguous { .. } => AppError::Ambiguous(message),
            ResolveError::Store(e) => e,
        }
    }
}

/// Resolves names with one read-only query per call. Nothing is cached.
#[derive(Clone)]
pub struct LookupResolver {
    lookups: Arc<dyn Lookups>,
}

impl LookupResolver {
    pub fn new(lookups: Arc<dyn Lookups>) -> Self {
        Self { lookups }
    }

    pub async fn resolve_book_by_title(&self, title: &str) -> Result<i32, ResolveError> {
        let books = self.lookups.books_by_title(title).await?;
        unique(EntityKind::Book, title, books.iter().map(|b| b.book_id))
    }

    pub async fn resolve_member_by_name(&self, name: &str) -> Result<i32, ResolveError> {
        let members = self.lookups.members_by_name(name).await?;
        unique(EntityKind::Member, name, members.iter().map(|m| m.member_id))
    }

    /// Resolve a (book title, member name) pair. The book is resolved first
    /// and its failure short-circuits the member lookup.
    pub async fn resolve_pair(&self, title: &str, name: &str) -> Result<(i32, i32), ResolveError> {
        let book_id = self.resolve_book_by_title(title).await?;
        let member_id = self.resolve_member_by_name(name).await?;
        Ok((book_id, member_id))
    }
}

fn unique(
    kind: EntityKind,
    name: &str,
    mut ids: impl Iterator<Item = i32>,
) -> Result<i32, ResolveError> {
    match (ids.next(), ids.next()) {
        (Some(id), None) => {
            tracing::debug!(%kind, name, id, "Resolved name");
            Ok(id)
        }
        (None, _) => {
            tracing::debug!(%kind, name, "Name did not resolve");
            Err(ResolveError::NotFound(kind))
        }
        (Some(_), Some(_)) => {
            tracing::warn!(%kind, name, "Name matches several rows");
            Err(ResolveError::Ambiguous {
                kind,
                name: name.to_string(),
            })
        }
    }
}

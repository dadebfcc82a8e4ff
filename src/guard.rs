//! Referential-integrity guard for deletions.
//!
//! Every catalog delete follows the same two-phase shape: load the entity
//! and its dependents, refuse when dependents remain, remove otherwise. The
//! check and the removal are separate store calls; a dependent inserted in
//! between leaves a dangling reference. That race is accepted, not mitigated.

use serde::de::DeserializeOwned;
use serde::Serialize;

use lectern_store::{Collection, Doc, RecordId, StoreError};

/// Result of a guarded delete attempt.
#[derive(Debug)]
pub enum DeleteOutcome<T, D> {
    /// The entity no longer exists; treated as already satisfied.
    AlreadyGone,
    /// Dependents still reference the entity; nothing was removed.
    Blocked {
        entity: Doc<T>,
        dependents: Vec<Doc<D>>,
    },
    /// No dependents; the entity was removed.
    Deleted,
}

/// Load an entity and its dependents for a delete confirmation view.
///
/// `None` means the entity is absent and the caller should redirect to the
/// list view rather than error.
pub async fn delete_preview<T, D>(
    entities: &Collection<T>,
    dependents: &Collection<D>,
    id: RecordId,
    references: impl Fn(&Doc<D>) -> bool,
) -> Result<Option<(Doc<T>, Vec<Doc<D>>)>, StoreError>
where
    T: Serialize + DeserializeOwned,
    D: Serialize + DeserializeOwned,
{
    let (entity, deps) = tokio::try_join!(
        entities.find_by_id(id),
        dependents.find(references)
    )?;
    Ok(entity.map(|entity| (entity, deps)))
}

/// Two-phase check-then-act delete.
pub async fn guard_delete<T, D>(
    entities: &Collection<T>,
    dependents: &Collection<D>,
    id: RecordId,
    references: impl Fn(&Doc<D>) -> bool,
) -> Result<DeleteOutcome<T, D>, StoreError>
where
    T: Serialize + DeserializeOwned,
    D: Serialize + DeserializeOwned,
{
    match delete_preview(entities, dependents, id, references).await? {
        None => Ok(DeleteOutcome::AlreadyGone),
        Some((entity, deps)) if !deps.is_empty() => Ok(DeleteOutcome::Blocked {
            entity,
            dependents: deps,
        }),
        Some(_) => {
            entities.remove(id).await?;
            Ok(DeleteOutcome::Deleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::author::models::Author;
    use crate::modules::book::models::Book;
    use crate::state::Catalog;

    fn author(first: &str, family: &str) -> Author {
        Author {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    fn book(title: &str, author: RecordId) -> Book {
        Book {
            title: title.to_string(),
            author,
            summary: "summary".to_string(),
            isbn: "123".to_string(),
            genre: vec![],
        }
    }

    #[tokio::test]
    async fn unreferenced_author_is_deleted_and_unfindable() {
        let catalog = Catalog::new();
        let id = catalog.authors.insert(&author("Ursula", "LeGuin")).await.unwrap();

        let outcome = guard_delete(&catalog.authors, &catalog.books, id, |b| {
            b.body.author == id
        })
        .await
        .unwrap();

        assert!(matches!(outcome, DeleteOutcome::Deleted));
        assert!(catalog.authors.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn referenced_author_is_kept_and_blockers_returned() {
        let catalog = Catalog::new();
        let id = catalog.authors.insert(&author("Frank", "Herbert")).await.unwrap();
        let other = catalog.authors.insert(&author("Kim", "Robinson")).await.unwrap();
        let dune = catalog.books.insert(&book("Dune", id)).await.unwrap();
        catalog.books.insert(&book("Mars", other)).await.unwrap();

        let outcome = guard_delete(&catalog.authors, &catalog.books, id, |b| {
            b.body.author == id
        })
        .await
        .unwrap();

        match outcome {
            DeleteOutcome::Blocked { entity, dependents } => {
                assert_eq!(entity.id, id);
                let blockers: Vec<RecordId> = dependents.iter().map(|d| d.id).collect();
                assert_eq!(blockers, [dune]);
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
        assert!(catalog.authors.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn deleting_a_missing_author_is_already_satisfied() {
        let catalog = Catalog::new();
        let ghost = RecordId::generate();

        let outcome = guard_delete(&catalog.authors, &catalog.books, ghost, |b| {
            b.body.author == ghost
        })
        .await
        .unwrap();

        assert!(matches!(outcome, DeleteOutcome::AlreadyGone));
    }

    #[tokio::test]
    async fn preview_returns_entity_and_dependents_without_removing() {
        let catalog = Catalog::new();
        let id = catalog.authors.insert(&author("Iain", "Banks")).await.unwrap();
        catalog.books.insert(&book("Excession", id)).await.unwrap();

        let (entity, deps) = delete_preview(&catalog.authors, &catalog.books, id, |b| {
            b.body.author == id
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(entity.id, id);
        assert_eq!(deps.len(), 1);
        assert!(catalog.authors.find_by_id(id).await.unwrap().is_some());
    }
}

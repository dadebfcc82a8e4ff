//! Demo catalog data, inserted at startup when `store.seed_demo` is set.

use time::macros::date;

use crate::modules::author::models::Author;
use crate::modules::book::models::Book;
use crate::modules::bookinstance::models::{BookInstance, Status};
use crate::modules::genre::models::Genre;
use crate::state::Catalog;

/// Populate an empty catalog with a handful of linked records.
pub async fn populate(catalog: &Catalog) -> anyhow::Result<()> {
    let herbert = catalog
        .authors
        .insert(&Author {
            first_name: "Frank".to_string(),
            family_name: "Herbert".to_string(),
            date_of_birth: Some(date!(1920 - 10 - 08)),
            date_of_death: Some(date!(1986 - 02 - 11)),
        })
        .await?;
    let leguin = catalog
        .authors
        .insert(&Author {
            first_name: "Ursula".to_string(),
            family_name: "LeGuin".to_string(),
            date_of_birth: Some(date!(1929 - 10 - 21)),
            date_of_death: Some(date!(2018 - 01 - 22)),
        })
        .await?;

    let fiction = catalog
        .genres
        .insert(&Genre {
            name: "Science Fiction".to_string(),
        })
        .await?;
    let fantasy = catalog
        .genres
        .insert(&Genre {
            name: "Fantasy".to_string(),
        })
        .await?;

    let dune = catalog
        .books
        .insert(&Book {
            title: "Dune".to_string(),
            author: herbert,
            summary: "The desert planet Arrakis is the only source of the spice melange."
                .to_string(),
            isbn: "9780441172719".to_string(),
            genre: vec![fiction],
        })
        .await?;
    let earthsea = catalog
        .books
        .insert(&Book {
            title: "A Wizard of Earthsea".to_string(),
            author: leguin,
            summary: "Ged learns the true cost of naming.".to_string(),
            isbn: "9780547773742".to_string(),
            genre: vec![fiction, fantasy],
        })
        .await?;

    catalog
        .copies
        .insert(&BookInstance {
            book: dune,
            imprint: "Ace Books, 1990".to_string(),
            status: Status::Available,
            due_back: None,
        })
        .await?;
    catalog
        .copies
        .insert(&BookInstance {
            book: earthsea,
            imprint: "HMH Books, 2012".to_string(),
            status: Status::Loaned,
            due_back: Some(date!(2026 - 09 - 01)),
        })
        .await?;

    tracing::info!("demo catalog seeded");
    Ok(())
}

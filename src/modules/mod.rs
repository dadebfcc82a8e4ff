pub mod author;
pub mod book;
pub mod bookinstance;
pub mod genre;
pub mod home;

use lectern_kernel::ModuleRegistry;

use crate::state::Catalog;

/// Register all catalog modules with the registry.
pub fn register_all(registry: &mut ModuleRegistry, catalog: &Catalog) {
    registry.register(home::create_module(catalog.clone()));
    registry.register(author::create_module(catalog.clone()));
    registry.register(book::create_module(catalog.clone()));
    registry.register(genre::create_module(catalog.clone()));
    registry.register(bookinstance::create_module(catalog.clone()));
}

mod catalog;
mod layout;

pub use catalog::CatalogPage;
pub use layout::AppLayout;

pub mod catalog;
pub mod classifier;

pub use catalog::{CatalogError, FamilyId, PotionCatalog, PotionDefinition, PotionFamily};
pub use classifier::{ClassifyError, Classifier, ItemForms};

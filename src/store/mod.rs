pub mod loader;
pub mod store;
pub mod taxonomy;
pub mod versioning;

pub use loader::{Corpus, CorpusError};
pub use store::{BrowsePool, ContentStore};
pub use taxonomy::{ContextDescription, Taxonomy, TaxonomyEntry};
pub use versioning::{CorpusCounts, CorpusManifest};

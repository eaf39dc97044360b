pub mod directory_resolver;
pub mod memory_blob_store;

pub use directory_resolver::DirectoryAccountResolver;
pub use memory_blob_store::MemoryBlobStore;

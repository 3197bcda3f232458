pub mod document_store;
pub mod memory_store;
pub mod mongo_store;

pub use document_store::{Database, DocumentStore};
pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;

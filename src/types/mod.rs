pub mod boxes;
pub mod token;
pub mod transaction;

// Re-export commonly used types
pub use boxes::{BoxAsset, BoxId, InputBox, OutputRequest};
pub use token::TokenId;
pub use transaction::{SignedTransaction, TransactionRequest, UnsignedTransaction};

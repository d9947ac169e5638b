//! Node implementations exposed to the workflow host

pub mod custom_embedder;
pub mod friend_grid;

pub use custom_embedder::CustomEmbedderNode;
pub use friend_grid::FriendGridNode;

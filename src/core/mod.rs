pub mod error;
pub mod types;

pub use error::{GatewayError, Result};
pub use types::{CardId, CardImage, Deck, GameDoc, User, YugiohCard};

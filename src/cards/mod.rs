pub mod bet;
pub mod card;
pub mod hand;
pub mod masks;
pub mod rank;
pub mod satisfy;
pub mod suit;

pub use bet::Bet;
pub use card::Card;
pub use card::make_card;
pub use hand::Hand;
pub use rank::Rank;
pub use satisfy::satisfies_bet;
pub use suit::Suit;

/// Number of distinct cards in the reduced deck (6 ranks x 4 suits).
pub const CARD_NB: usize = 24;
/// Largest hand size tracked by the hand index.
pub const HAND_SZ: usize = 6;
/// Number of hands of size <= HAND_SZ: sum_{k=0..=6} C(24, k).
pub const HAND_NB: usize = 190_051;

/// Card rank in the reduced 24-card deck: 9, T, J, Q, K, A.
///
/// Unlike a standard deck, ranks below 9 do not exist — this is a
/// Thai-style short deck. Rank order is the natural poker order
/// `9 < T < J < Q < K < A`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    #[default]
    Nine = 0,
    Ten = 1,
    Jack = 2,
    Queen = 3,
    King = 4,
    Ace = 5,
}

impl Rank {
    /// All six ranks in ascending order.
    pub const fn all() -> [Rank; 6] {
        [
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Nine,
            1 => Rank::Ten,
            2 => Rank::Jack,
            3 => Rank::Queen,
            4 => Rank::King,
            5 => Rank::Ace,
            _ => unreachable!("invalid rank: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_roundtrip() {
        for r in Rank::all() {
            assert_eq!(Rank::from(u8::from(r)), r);
        }
    }

    #[test]
    fn ascending_order() {
        let all = Rank::all();
        for w in all.windows(2) {
            assert!(w[0] < w[1]);
        }
    }
}

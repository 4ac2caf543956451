//! Card parsing from string tokens (e.g., "JD", "9H", "TS") and display forms.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use super::errors::DomainError;

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(DomainError::parse(format!("invalid rank: {s}"))),
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "♥" => Ok(Suit::Hearts),
            "D" | "♦" => Ok(Suit::Diamonds),
            "C" | "♣" => Ok(Suit::Clubs),
            "S" | "♠" => Ok(Suit::Spades),
            _ => Err(DomainError::parse(format!("invalid suit: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    /// Rank token followed by a single suit character: "JD", "TS", "10H", "A♠".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((idx, _)) = s.char_indices().last() else {
            return Err(DomainError::parse(format!("empty card token: {s:?}")));
        };
        let (rank_part, suit_part) = s.split_at(idx);
        if rank_part.is_empty() {
            return Err(DomainError::parse(format!("missing rank: {s}")));
        }
        let rank = rank_part
            .parse::<Rank>()
            .map_err(|_| DomainError::parse(format!("parse card: {s}")))?;
        let suit = suit_part
            .parse::<Suit>()
            .map_err(|_| DomainError::parse(format!("parse card: {s}")))?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Short form, e.g. `J♦`. Use `{:#}` for the long form, `Jack of Diamonds`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} of {}", self.rank.name(), self.suit.name())
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

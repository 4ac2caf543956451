//! Trick rules: card strength under trump/lead, legal plays, trick winner.

use super::cards_types::{Card, Rank, Suit};

/// Strength of `card` in a trick with the given trump and lead suit.
///
/// Right bower 18, left bower 17, trump Ace 16, King 15, Queen 14, Ten 12,
/// Nine 11, lead-suit Ace..Nine 6..1, anything else 0.
pub fn card_value(card: Card, trump: Suit, lead: Suit) -> u8 {
    let left_bower = card.is_left_bower(trump);
    if card.suit != trump && card.suit != lead && !left_bower {
        return 0;
    }

    let mut value = 1;
    if card.suit == trump {
        value += 10;
        if card.rank == Rank::Jack {
            value += 5;
        }
    }
    // Independent of the suit checks above: the left bower's printed suit is
    // neither trump nor (necessarily) lead.
    if left_bower {
        value += 14;
    }
    value + card.rank.ordinal()
}

/// Whether `lead` opens a trump trick, counting the left bower as trump.
pub fn trump_was_led(lead: Card, trump: Suit) -> bool {
    lead.suit == trump || lead.is_left_bower(trump)
}

/// Cards from `hand` the player may legally play.
///
/// `lead` is the first card of the current trick, `None` when this player leads.
/// Hand order is preserved.
pub fn legal_plays(hand: &[Card], trump: Suit, lead: Option<Card>) -> Vec<Card> {
    let Some(lead) = lead else {
        return hand.to_vec();
    };

    // A led left bower is a trump lead, not a lead of its printed suit.
    let lead_suit = if trump_was_led(lead, trump) {
        trump
    } else {
        lead.suit
    };

    let followers: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| {
            if lead_suit == trump {
                c.is_trump(trump)
            } else {
                c.suit == lead_suit && !c.is_left_bower(trump)
            }
        })
        .collect();
    if !followers.is_empty() {
        return followers;
    }

    hand.to_vec()
}

pub fn is_legal_play(card: Card, hand: &[Card], trump: Suit, lead: Option<Card>) -> bool {
    legal_plays(hand, trump, lead).contains(&card)
}

/// Index (play order) of the winning card among four played cards.
///
/// The strictly greatest `card_value` wins; ties keep the earliest card. Ties
/// only happen between value-0 cards, and the lead card always scores at
/// least 1, so the tie rule never decides a real trick.
pub fn trick_winner(cards: &[Card; 4], trump: Suit, lead: Suit) -> usize {
    let mut best_idx = 0usize;
    let mut best_value = card_value(cards[0], trump, lead);
    for (i, card) in cards.iter().enumerate().skip(1) {
        let value = card_value(*card, trump, lead);
        if value > best_value {
            best_idx = i;
            best_value = value;
        }
    }
    best_idx
}

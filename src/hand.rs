use crate::cards::{parse_cards, Card, Rank};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a group needs at least one card")]
    Empty,
    #[error("group mixes ranks {0} and {1}")]
    MixedRanks(Rank, Rank),
    #[error("card {0} is not in hand")]
    MissingCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A non-empty run of same-rank cards committed together.
///
/// ```
/// use president_rs::hand::Group;
///
/// let pair: Group = "9c 9h".parse().unwrap();
/// assert_eq!(pair.len(), 2);
/// assert!("9c 10h".parse::<Group>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    cards: Vec<Card>,
}

impl Group {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let first = *cards.first().ok_or(HandError::Empty)?;
        if let Some(other) = cards.iter().find(|c| c.rank() != first.rank()) {
            return Err(HandError::MixedRanks(first.rank(), other.rank()));
        }
        Ok(Self { cards })
    }

    pub fn rank(&self) -> Rank {
        self.cards[0].rank()
    }

    /// The card that becomes the new pile top.
    pub fn lead(&self) -> Card {
        self.cards[0]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Group {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(cards)
    }
}

/// A hand split into same-rank groups, ascending by rank.
///
/// Example: 3♠ 9♣ 3♥ groups as [(3, [3♠, 3♥]), (9, [9♣])]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, Vec<Card>)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
        for rank in Rank::ALL {
            let same: Vec<Card> = cards.iter().copied().filter(|c| c.rank() == rank).collect();
            if !same.is_empty() {
                groups.push((rank, same));
            }
        }
        Self { groups }
    }

    /// Cards of `rank`, empty if none are held.
    pub fn get(&self, rank: Rank) -> &[Card] {
        self.groups.iter().find(|(r, _)| *r == rank).map(|(_, cs)| cs.as_slice()).unwrap_or(&[])
    }

    /// The biggest group; a later rank only wins with strictly more cards,
    /// so ties go to the lowest rank.
    pub fn largest(&self) -> Option<&[Card]> {
        let mut best: Option<&[Card]> = None;
        for (_, cards) in &self.groups {
            if best.map_or(true, |b| cards.len() > b.len()) {
                best = Some(cards);
            }
        }
        best
    }

    /// Lowest rank holding at least `count` cards and valued at least `floor`.
    pub fn lowest_with(&self, count: usize, floor: Option<u8>) -> Option<&[Card]> {
        self.groups
            .iter()
            .find(|(rank, cards)| cards.len() >= count && floor.map_or(true, |f| rank.value() >= f))
            .map(|(_, cards)| cards.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Card])> {
        self.groups.iter().map(|(r, cs)| (*r, cs.as_slice()))
    }
}

/// One player's cards. Kept sorted so listings and group order are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn groups(&self) -> RankGroups {
        RankGroups::from_cards(&self.cards)
    }

    /// Remove `cards` as one group. Nothing is removed unless every card is
    /// present and they share a rank.
    pub fn take(&mut self, cards: &[Card]) -> Result<Group, HandError> {
        let group = Group::try_new(cards.to_vec())?;
        if let Some(missing) = cards.iter().find(|c| !self.contains(**c)) {
            return Err(HandError::MissingCard(*missing));
        }
        self.cards.retain(|c| !cards.contains(c));
        Ok(group)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::new(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

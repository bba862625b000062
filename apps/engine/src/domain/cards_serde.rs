//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "CLUBS" => Ok(Suit::Clubs),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// Card serde uses the compact token format ("AS", "10C")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>().map_err(serde::de::Error::custom)
    }
}

//! The four kuta attribute classes: gana, nadi, varna, yoni.
//!
//! Small closed enums with fixed ordering. Varna's order is a total rank
//! (Brahmin first) that the Varna kuta compares directionally; the other
//! three are matched for equality or membership only.

use serde::{Deserialize, Serialize};

/// Gana (temperament) class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// All 3 ganas in order.
pub const ALL_GANAS: [Gana; 3] = [Gana::Deva, Gana::Manushya, Gana::Rakshasa];

impl Gana {
    /// Name of the gana class.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }

    /// 0-based index (Deva=0 .. Rakshasa=2).
    pub const fn index(self) -> u8 {
        match self {
            Self::Deva => 0,
            Self::Manushya => 1,
            Self::Rakshasa => 2,
        }
    }

    /// All 3 ganas in order.
    pub const fn all() -> &'static [Gana; 3] {
        &ALL_GANAS
    }
}

/// Nadi (humor) class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// All 3 nadis in order.
pub const ALL_NADIS: [Nadi; 3] = [Nadi::Adi, Nadi::Madhya, Nadi::Antya];

impl Nadi {
    /// Name of the nadi class.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }

    /// 0-based index (Adi=0 .. Antya=2).
    pub const fn index(self) -> u8 {
        match self {
            Self::Adi => 0,
            Self::Madhya => 1,
            Self::Antya => 2,
        }
    }

    /// All 3 nadis in order.
    pub const fn all() -> &'static [Nadi; 3] {
        &ALL_NADIS
    }
}

/// Varna (caste-analog) class, totally ordered Brahmin first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

/// All 4 varnas in rank order.
pub const ALL_VARNAS: [Varna; 4] = [
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
];

impl Varna {
    /// Name of the varna class.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }

    /// Rank in the fixed order (Brahmin=0 .. Shudra=3). The Varna kuta
    /// compares these ranks, not the names.
    pub const fn index(self) -> u8 {
        match self {
            Self::Brahmin => 0,
            Self::Kshatriya => 1,
            Self::Vaishya => 2,
            Self::Shudra => 3,
        }
    }

    /// All 4 varnas in rank order.
    pub const fn all() -> &'static [Varna; 4] {
        &ALL_VARNAS
    }
}

/// Yoni (animal nature) class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Snake,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Lion,
    Mongoose,
}

/// All 14 yonis in order (0 = Horse, 13 = Mongoose).
pub const ALL_YONIS: [Yoni; 14] = [
    Yoni::Horse,
    Yoni::Elephant,
    Yoni::Sheep,
    Yoni::Snake,
    Yoni::Dog,
    Yoni::Cat,
    Yoni::Rat,
    Yoni::Cow,
    Yoni::Buffalo,
    Yoni::Tiger,
    Yoni::Deer,
    Yoni::Monkey,
    Yoni::Lion,
    Yoni::Mongoose,
];

impl Yoni {
    /// Animal name of the yoni.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Snake => "Snake",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Lion => "Lion",
            Self::Mongoose => "Mongoose",
        }
    }

    /// Sanskrit name of the yoni.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Horse => "Ashwa",
            Self::Elephant => "Gaja",
            Self::Sheep => "Mesha",
            Self::Snake => "Sarpa",
            Self::Dog => "Shwan",
            Self::Cat => "Marjara",
            Self::Rat => "Mushaka",
            Self::Cow => "Gau",
            Self::Buffalo => "Mahisha",
            Self::Tiger => "Vyaghra",
            Self::Deer => "Mriga",
            Self::Monkey => "Vanara",
            Self::Lion => "Simha",
            Self::Mongoose => "Nakula",
        }
    }

    /// 0-based index (Horse=0 .. Mongoose=13).
    pub const fn index(self) -> u8 {
        match self {
            Self::Horse => 0,
            Self::Elephant => 1,
            Self::Sheep => 2,
            Self::Snake => 3,
            Self::Dog => 4,
            Self::Cat => 5,
            Self::Rat => 6,
            Self::Cow => 7,
            Self::Buffalo => 8,
            Self::Tiger => 9,
            Self::Deer => 10,
            Self::Monkey => 11,
            Self::Lion => 12,
            Self::Mongoose => 13,
        }
    }

    /// All 14 yonis in order.
    pub const fn all() -> &'static [Yoni; 14] {
        &ALL_YONIS
    }
}

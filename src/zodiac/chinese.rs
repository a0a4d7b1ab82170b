//! Chinese zodiac animal (earthly branch) and year element (heavenly stem).
//!
//! Both cycles are anchored on the Gregorian year number, with year 4 CE as
//! the start of each cycle (Rat, Wood/Yang). The lunar new year boundary is
//! not applied: a birth in January 1986 is still a Tiger/Fire-Yang year.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::CHINESE_CYCLE_ANCHOR_YEAR;

/// The twelve earthly-branch animals, Rat first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ALL_ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

impl ChineseAnimal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five elements (wu xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the ten heavenly stems: an element with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeavenlyStem {
    pub element: Element,
    pub polarity: Polarity,
}

impl HeavenlyStem {
    const fn new(element: Element, polarity: Polarity) -> Self {
        Self { element, polarity }
    }

    /// Traditional stem name (Jia, Yi, Bing, ...).
    pub const fn pinyin(self) -> &'static str {
        match (self.element, self.polarity) {
            (Element::Wood, Polarity::Yang) => "Jia",
            (Element::Wood, Polarity::Yin) => "Yi",
            (Element::Fire, Polarity::Yang) => "Bing",
            (Element::Fire, Polarity::Yin) => "Ding",
            (Element::Earth, Polarity::Yang) => "Wu",
            (Element::Earth, Polarity::Yin) => "Ji",
            (Element::Metal, Polarity::Yang) => "Geng",
            (Element::Metal, Polarity::Yin) => "Xin",
            (Element::Water, Polarity::Yang) => "Ren",
            (Element::Water, Polarity::Yin) => "Gui",
        }
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity, self.element)
    }
}

/// The ten stems in cycle order (index 0 = Jia, Wood/Yang).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::new(Element::Wood, Polarity::Yang),
    HeavenlyStem::new(Element::Wood, Polarity::Yin),
    HeavenlyStem::new(Element::Fire, Polarity::Yang),
    HeavenlyStem::new(Element::Fire, Polarity::Yin),
    HeavenlyStem::new(Element::Earth, Polarity::Yang),
    HeavenlyStem::new(Element::Earth, Polarity::Yin),
    HeavenlyStem::new(Element::Metal, Polarity::Yang),
    HeavenlyStem::new(Element::Metal, Polarity::Yin),
    HeavenlyStem::new(Element::Water, Polarity::Yang),
    HeavenlyStem::new(Element::Water, Polarity::Yin),
];

/// Zodiac animal of a Gregorian year.
pub fn chinese_animal(year: i32) -> ChineseAnimal {
    let idx = (i64::from(year) - i64::from(CHINESE_CYCLE_ANCHOR_YEAR)).rem_euclid(12);
    ALL_ANIMALS[idx as usize]
}

/// Element and polarity of a Gregorian year.
pub fn chinese_element(year: i32) -> HeavenlyStem {
    let idx = (i64::from(year) - i64::from(CHINESE_CYCLE_ANCHOR_YEAR)).rem_euclid(10);
    ALL_STEMS[idx as usize]
}

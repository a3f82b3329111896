use std::fmt;

use crate::{ValidationError, validation::check_not_negative};

/// A named decimal magnitude, together with the Lithuanian word forms that agree with its count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
    Quintillion,
}

struct ScaleWords {
    value: i64,
    singular: &'static str,
    plural: &'static str,
    genitive_plural: &'static str,
    speaks_count_when_one: bool,
}

const fn scale_words(
    value: i64,
    singular: &'static str,
    plural: &'static str,
    genitive_plural: &'static str,
) -> ScaleWords {
    ScaleWords {
        value,
        singular,
        plural,
        genitive_plural,
        speaks_count_when_one: true,
    }
}

const HUNDRED: ScaleWords = ScaleWords {
    speaks_count_when_one: false,
    ..scale_words(100, "šimtas", "šimtai", "šimtų")
};
const THOUSAND: ScaleWords = scale_words(1_000, "tūkstantis", "tūkstančiai", "tūkstančių");
const MILLION: ScaleWords = scale_words(1_000_000, "milijonas", "milijonai", "milijonų");
const BILLION: ScaleWords = scale_words(1_000_000_000, "milijardas", "milijardai", "milijardų");
const TRILLION: ScaleWords = scale_words(1_000_000_000_000, "trilijonas", "trilijonai", "trilijonų");
const QUADRILLION: ScaleWords = scale_words(
    1_000_000_000_000_000,
    "kvadrilijonas",
    "kvadrilijonai",
    "kvadrilijonų",
);
const QUINTILLION: ScaleWords = scale_words(
    1_000_000_000_000_000_000,
    "kvintilijonas",
    "kvintilijonai",
    "kvintilijonų",
);

impl Scale {
    /// All scales, smallest first
    pub const ASCENDING: [Scale; 7] = [
        Scale::Hundred,
        Scale::Thousand,
        Scale::Million,
        Scale::Billion,
        Scale::Trillion,
        Scale::Quadrillion,
        Scale::Quintillion,
    ];

    /// All scales, largest first - the order in which a number is decomposed
    pub const DESCENDING: [Scale; 7] = [
        Scale::Quintillion,
        Scale::Quadrillion,
        Scale::Trillion,
        Scale::Billion,
        Scale::Million,
        Scale::Thousand,
        Scale::Hundred,
    ];

    fn words(self) -> &'static ScaleWords {
        match self {
            Scale::Hundred => &HUNDRED,
            Scale::Thousand => &THOUSAND,
            Scale::Million => &MILLION,
            Scale::Billion => &BILLION,
            Scale::Trillion => &TRILLION,
            Scale::Quadrillion => &QUADRILLION,
            Scale::Quintillion => &QUINTILLION,
        }
    }

    /// The numerical value of the scale, e.g. 100 for [`Scale::Hundred`]
    pub fn value(self) -> i64 {
        self.words().value
    }

    /// Used with counts ending in 1, e.g. "vienas tūkstantis", "dvidešimt vienas tūkstantis"
    pub fn singular(self) -> &'static str {
        self.words().singular
    }

    /// Used with counts ending in 2 to 9, e.g. "du tūkstančiai"
    pub fn plural(self) -> &'static str {
        self.words().plural
    }

    /// Used with counts ending in 0 or 11 to 19, e.g. "dešimt tūkstančių", "dvylika tūkstančių"
    pub fn genitive_plural(self) -> &'static str {
        self.words().genitive_plural
    }

    /// Whether the count "vienas" is meant to be spoken before this scale
    pub fn speaks_count_when_one(self) -> bool {
        self.words().speaks_count_when_one
    }

    /// Returns the form of this scale that agrees with the given count
    pub fn form_for_count(self, count: i64) -> Result<&'static str, ValidationError> {
        check_not_negative(count)?;
        let last_two_digits = count % 100;
        let last_digit = count % 10;

        if last_two_digits > 10 && last_two_digits < 20 {
            return Ok(self.genitive_plural());
        }

        // round counts share the form with 11 to 19
        if last_digit == 0 {
            return Ok(self.genitive_plural());
        }

        if last_digit == 1 {
            return Ok(self.singular());
        }
        Ok(self.plural())
    }
}

impl From<Scale> for i64 {
    fn from(value: Scale) -> Self {
        value.value()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Words for the numbers 0 to 19, indexed by value
pub const ZERO_TO_NINETEEN: [&str; 20] = [
    "nulis",
    "vienas",
    "du",
    "trys",
    "keturi",
    "penki",
    "šeši",
    "septyni",
    "aštuoni",
    "devyni",
    "dešimt",
    "vienuolika",
    "dvylika",
    "trylika",
    "keturiolika",
    "penkiolika",
    "šešiolika",
    "septyniolika",
    "aštuoniolika",
    "devyniolika",
];

/// Words for the multiples of ten from 0 to 90, indexed by the tens digit
pub const TENS: [&str; 10] = [
    ZERO_TO_NINETEEN[0],
    ZERO_TO_NINETEEN[10],
    "dvidešimt",
    "trisdešimt",
    "keturiasdešimt",
    "penkiasdešimt",
    "šešiasdešimt",
    "septyniasdešimt",
    "aštuoniasdešimt",
    "devyniasdešimt",
];

pub const MINUS: &str = "minus";

pub const WORD_SEPARATOR: char = ' ';

use log::{debug, trace};

use crate::{
    ValidationError,
    constants::{MINUS, TENS, WORD_SEPARATOR, ZERO_TO_NINETEEN},
    scale::Scale,
    validation::check_value_between,
};

/// Converts numbers into Lithuanian words.
///
/// The converter holds no state, so a single instance can be shared freely between threads.
///
/// ```text
/// to_lithuanian(0)     -> "nulis"
/// to_lithuanian(123)   -> "vienas šimtas dvidešimt trys"
/// to_lithuanian(1993)  -> "vienas tūkstantis devyni šimtai devyniasdešimt trys"
/// to_lithuanian(-5)    -> "minus penki"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberConverter;

impl NumberConverter {
    pub fn create() -> Self {
        Self
    }

    pub fn to_lithuanian(&self, number: i64) -> String {
        to_words(number)
    }
}

/// Converts any `i64`, including both extreme values, into Lithuanian words
pub fn to_words(number: i64) -> String {
    convert(number).expect("every i64 decomposes into groups below one thousand")
}

fn convert(number: i64) -> Result<String, ValidationError> {
    if number == i64::MIN {
        // -9223372036854775808 can't be negated, so we convert -9223372036854775800
        // and add the last digit separately
        debug!("converting {number} through {}", i64::MIN + 8);
        let mut result = convert(i64::MIN + 8)?;
        result.push(WORD_SEPARATOR);
        result.push_str(ZERO_TO_NINETEEN[8]);
        return Ok(result);
    }

    if number < 0 {
        let mut result = String::from(MINUS);
        result.push(WORD_SEPARATOR);
        result.push_str(&convert(-number)?);
        return Ok(result);
    }

    if number < ZERO_TO_NINETEEN.len() as i64 {
        return Ok(ZERO_TO_NINETEEN[number as usize].to_owned());
    }

    let mut result = String::new();
    let mut remainder = number;
    for scale in Scale::DESCENDING {
        remainder = extract_scale(remainder, scale, &mut result)?;
    }

    // the word for zero is only used for zero itself, which is handled above
    if remainder > 0 {
        result.push_str(&render_up_to_hundred(remainder)?);
    }

    Ok(result.trim().to_owned())
}

/// Appends the words for the `scale` part of `number` to `out` and returns the rest.
///
/// E.g. for [`Scale::Thousand`] and 2018, "du tūkstančiai " is appended and 18 is returned.
/// Nothing is appended if `number` is smaller than the scale.
fn extract_scale(number: i64, scale: Scale, out: &mut String) -> Result<i64, ValidationError> {
    let scale_value = scale.value();
    if number < scale_value {
        return Ok(number);
    }

    let count = number / scale_value;
    trace!("extracted {count} x {scale_value} from {number}");
    out.push_str(&render_up_to_thousand(count)?);
    out.push(WORD_SEPARATOR);
    out.push_str(scale.form_for_count(count)?);
    out.push(WORD_SEPARATOR);
    Ok(number - count * scale_value)
}

fn render_up_to_thousand(number: i64) -> Result<String, ValidationError> {
    check_value_between(0, 999, number)?;
    if number < ZERO_TO_NINETEEN.len() as i64 {
        return Ok(ZERO_TO_NINETEEN[number as usize].to_owned());
    }

    let mut result = String::new();
    let without_hundreds = extract_scale(number, Scale::Hundred, &mut result)?;
    if without_hundreds > 0 {
        result.push_str(&render_up_to_hundred(without_hundreds)?);
    }
    Ok(result.trim().to_owned())
}

fn render_up_to_hundred(number: i64) -> Result<String, ValidationError> {
    check_value_between(0, 99, number)?;
    if number < ZERO_TO_NINETEEN.len() as i64 {
        return Ok(ZERO_TO_NINETEEN[number as usize].to_owned());
    }

    let tens = TENS[(number / 10) as usize];
    match number % 10 {
        0 => Ok(tens.to_owned()),
        ones => Ok(format!("{tens}{WORD_SEPARATOR}{}", ZERO_TO_NINETEEN[ones as usize])),
    }
}

use lib::input::IStr;

use super::{CalibrationError, Calibrator, Mode};

const DIGITS: Calibrator = Calibrator::new(Mode::Digits);
const WORDS: Calibrator = Calibrator::new(Mode::Words);

#[test]
fn test_digits() {
    assert_eq!(DIGITS.value(b"1abc2"), Ok(12));
    assert_eq!(DIGITS.value(b"pqr3stu8vwx"), Ok(38));
    assert_eq!(DIGITS.value(b"a1b2c3d4e5f"), Ok(15));
    assert_eq!(DIGITS.value(b"treb7uchet"), Ok(77));
}

#[test]
fn test_digits_ignore_words() {
    assert_eq!(DIGITS.value(b"two1nine"), Ok(11));
    assert_eq!(DIGITS.value(b"eightwothree"), Err(CalibrationError::NoDigits));
}

#[test]
fn test_words() {
    assert_eq!(WORDS.value(b"two1nine"), Ok(29));
    assert_eq!(WORDS.value(b"eightwothree"), Ok(83));
    assert_eq!(WORDS.value(b"abcone2threexyz"), Ok(13));
    assert_eq!(WORDS.value(b"4nineeightseven2"), Ok(42));
    assert_eq!(WORDS.value(b"zoneight234"), Ok(14));
    assert_eq!(WORDS.value(b"7pqrstsixteen"), Ok(76));
    assert_eq!(WORDS.value(b"zero"), Ok(0));
}

#[test]
fn test_overlapping_words() {
    assert_eq!(WORDS.value(b"twone"), Ok(21));
    assert_eq!(WORDS.value(b"eightwo"), Ok(82));
    assert_eq!(WORDS.value(b"xoneightx"), Ok(18));
    assert_eq!(WORDS.value(b"sevenine"), Ok(79));
}

#[test]
fn test_no_tokens() {
    assert_eq!(WORDS.value(b""), Err(CalibrationError::NoDigits));
    assert_eq!(WORDS.value(b"abcdef"), Err(CalibrationError::NoDigits));
    assert_eq!(WORDS.value(b"ONE"), Err(CalibrationError::NoDigits));
    assert_eq!(WORDS.value(b"on"), Err(CalibrationError::NoDigits));
}

#[test]
fn test_mode_from_str() {
    assert_eq!("digits".parse::<Mode>().unwrap(), Mode::Digits);
    assert_eq!("words".parse::<Mode>().unwrap(), Mode::Words);

    let error = "letters".parse::<Mode>().unwrap_err();
    assert_eq!(
        error.to_string(),
        "unknown mode `letters`, expected `digits` or `words`"
    );
}

#[test]
fn test_total() {
    let input = IStr::new(b"1abc2\npqr3stu8vwx\n\na1b2c3d4e5f\ntreb7uchet\n");
    assert_eq!(DIGITS.total(input).unwrap(), 142);
    // Same input, same answer.
    assert_eq!(DIGITS.total(input).unwrap(), 142);
}

#[test]
fn test_total_reports_failing_line() {
    let input = IStr::new(b"1abc2\nnothing here\n");
    let error = DIGITS.total(input).unwrap_err();
    let error = error.downcast::<lib::input::IStrError>().unwrap();
    assert_eq!(error.span(), 6..18);
    assert_eq!(error.to_string(), "no digit in line");
}

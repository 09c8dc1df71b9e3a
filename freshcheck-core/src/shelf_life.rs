//! Shelf-life parsing: turns the service's free-text remaining-days estimate
//! ("5", "3-5", "约7天") into a day count usable for expiry arithmetic.

/// Applied when the text carries no usable number.
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 3;

/// Extracts the first run of ASCII digits and reads it as a day count.
///
/// A range like "3-5" yields the conservative lower bound 3, not 35. Text
/// with no digits, or a zero, falls back to [`DEFAULT_SHELF_LIFE_DAYS`].
pub fn parse_shelf_life_days(text: &str) -> i64 {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    match digits.parse::<i64>() {
        Ok(days) if days > 0 => days,
        _ => DEFAULT_SHELF_LIFE_DAYS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number_parses() {
        assert_eq!(parse_shelf_life_days("5"), 5);
        assert_eq!(parse_shelf_life_days("14"), 14);
    }

    #[test]
    fn range_takes_the_lower_bound() {
        assert_eq!(parse_shelf_life_days("3-5"), 3);
        assert_eq!(parse_shelf_life_days("1~2天"), 1);
    }

    #[test]
    fn surrounding_text_is_ignored() {
        assert_eq!(parse_shelf_life_days("约7天"), 7);
        assert_eq!(parse_shelf_life_days("大约 10 天左右"), 10);
    }

    #[test]
    fn no_digits_falls_back_to_default() {
        assert_eq!(parse_shelf_life_days("无"), DEFAULT_SHELF_LIFE_DAYS);
        assert_eq!(parse_shelf_life_days(""), DEFAULT_SHELF_LIFE_DAYS);
        assert_eq!(parse_shelf_life_days("尽快食用"), DEFAULT_SHELF_LIFE_DAYS);
    }

    #[test]
    fn zero_is_not_a_usable_shelf_life() {
        assert_eq!(parse_shelf_life_days("0"), DEFAULT_SHELF_LIFE_DAYS);
        assert_eq!(parse_shelf_life_days("0天"), DEFAULT_SHELF_LIFE_DAYS);
    }
}

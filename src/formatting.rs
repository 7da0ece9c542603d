use std::fmt;

// ─── Ordinal ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinal {
    St,
    Nd,
    Rd,
    Th,
}

impl Ordinal {
    pub fn as_str(self) -> &'static str {
        match self {
            Ordinal::St => "st",
            Ordinal::Nd => "nd",
            Ordinal::Rd => "rd",
            Ordinal::Th => "th",
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// English ordinal suffix for `value`: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn number_ordinal(value: i64) -> Ordinal {
    if is_number_between(value % 100, 10, 20, true) {
        return Ordinal::Th;
    }
    match value % 10 {
        1 => Ordinal::St,
        2 => Ordinal::Nd,
        3 => Ordinal::Rd,
        _ => Ordinal::Th,
    }
}

pub fn with_ordinal(value: i64) -> String {
    format!("{value}{}", number_ordinal(value))
}

// ─── Ranges ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<T = f64> {
    pub lower_bound: T,
    pub upper_bound: T,
}

impl<T: PartialOrd + Copy> NumericRange<T> {
    pub fn new(lower_bound: T, upper_bound: T) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Inclusive ranges accept the bounds themselves: 2, 3, 4, 5 are in the
    /// inclusive range 2..5 while only 3 and 4 are in the exclusive one.
    pub fn contains(&self, value: T, inclusive: bool) -> bool {
        is_number_between(value, self.lower_bound, self.upper_bound, inclusive)
    }
}

pub fn is_number_in_range<T: PartialOrd + Copy>(
    value: T,
    range: &NumericRange<T>,
    inclusive: bool,
) -> bool {
    range.contains(value, inclusive)
}

pub fn is_number_between<T: PartialOrd>(value: T, lower_bound: T, upper_bound: T, inclusive: bool) -> bool {
    if inclusive {
        value >= lower_bound && value <= upper_bound
    } else {
        value > lower_bound && value < upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_few_ordinals() {
        let got: Vec<String> = (0..=5).map(with_ordinal).collect();
        assert_eq!(got, ["0th", "1st", "2nd", "3rd", "4th", "5th"]);
    }

    #[test]
    fn test_teens_are_th() {
        for n in [10, 11, 12, 13, 19, 20, 111, 112, 113, 1012] {
            assert_eq!(number_ordinal(n), Ordinal::Th, "{n}");
        }
    }

    #[test]
    fn test_past_the_teens() {
        assert_eq!(number_ordinal(21), Ordinal::St);
        assert_eq!(number_ordinal(22), Ordinal::Nd);
        assert_eq!(number_ordinal(23), Ordinal::Rd);
        assert_eq!(number_ordinal(101), Ordinal::St);
        assert_eq!(with_ordinal(1002), "1002nd");
    }

    #[test]
    fn test_negative_values_fall_back_to_th() {
        assert_eq!(number_ordinal(-1), Ordinal::Th);
        assert_eq!(number_ordinal(-22), Ordinal::Th);
    }

    #[test]
    fn test_exclusive_and_inclusive_bounds() {
        assert!(!is_number_between(2, 2, 5, false));
        assert!(is_number_between(3, 2, 5, false));
        assert!(is_number_between(2, 2, 5, true));
        assert!(is_number_between(5, 2, 5, true));
        assert!(!is_number_between(6, 2, 5, true));
    }

    #[test]
    fn test_numeric_range() {
        let range = NumericRange::new(0.5, 1.5);
        assert!(range.contains(1.0, false));
        assert!(!is_number_in_range(1.5, &range, false));
        assert!(is_number_in_range(1.5, &range, true));
    }
}

//! Decomposition of the human readable numbers shown in stat cards
//! (`"85%"`, `"1.2K+"`, `"500€"`) into a magnitude plus decorations, and the
//! per-frame rendering used while a counter animates.

/// Decorations found anywhere in the label. Each one is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorations {
    pub percent: bool,
    pub plus: bool,
    pub thousands: bool,
    pub currency: bool,
}

impl Decorations {
    pub fn detect(text: &str) -> Self {
        Self {
            percent: text.contains('%'),
            plus: text.contains('+'),
            thousands: text.contains('K'),
            currency: text.contains('€'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayValue {
    pub magnitude: f64,
    pub decorations: Decorations,
}

impl DisplayValue {
    /// Returns `None` for text without a single digit; such labels are never
    /// animated.
    pub fn parse(text: &str) -> Option<Self> {
        let stripped: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if !stripped.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            magnitude: leading_number(&stripped)?,
            decorations: Decorations::detect(text),
        })
    }

    /// Renders `current` with this value's decorations. In thousands mode the
    /// live value is divided by 1000 and shown with one decimal.
    pub fn render(&self, current: f64) -> String {
        let mut text = if self.decorations.thousands {
            format!("{}K", to_fixed_1(current / 1000.0))
        } else {
            format!("{}", current.floor())
        };
        if self.decorations.plus {
            text.push('+');
        }
        if self.decorations.percent {
            text.push('%');
        }
        if self.decorations.currency {
            text.push('€');
        }
        text
    }
}

/// One decimal place. An exact tie goes to the larger value, like a browser's
/// `toFixed(1)`.
fn to_fixed_1(x: f64) -> String {
    let twenty = (x * 20.0).round();
    let exact_half_tenth = x.mul_add(20.0, -twenty) == 0.0 && twenty % 2.0 != 0.0;
    if exact_half_tenth {
        format!("{:.1}", (x * 10.0).ceil() / 10.0)
    } else {
        format!("{:.1}", x)
    }
}

/// Longest prefix of `digits_and_dots` that reads as a decimal number, so
/// `"1.2.3"` gives 1.2 and `".5"` gives 0.5.
fn leading_number(digits_and_dots: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in digits_and_dots.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + c.len_utf8();
    }
    let prefix = digits_and_dots[..end].trim_end_matches('.');
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

//! Rupee display helpers for the rendered forms.
//!
//! Indian numbering throughout: amounts group as lakh and crore
//! (12,34,56,789) and the words representation uses Lakh/Crore rather than
//! Million/Billion.

use rust_decimal::Decimal;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digit(n: u64) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

fn three_digit(n: u64) -> String {
    if n < 100 {
        two_digit(n)
    } else if n % 100 == 0 {
        format!("{} Hundred", ONES[(n / 100) as usize])
    } else {
        format!("{} Hundred {}", ONES[(n / 100) as usize], two_digit(n % 100))
    }
}

fn indian_words(n: u64) -> String {
    let crore = n / 10_000_000;
    let lakh = (n / 100_000) % 100;
    let thousand = (n / 1_000) % 100;
    let rest = n % 1_000;

    let mut parts = Vec::new();
    if crore > 0 {
        // Crores recurse so that e.g. 123 crore reads "One Hundred Twenty
        // Three Crore".
        parts.push(format!("{} Crore", indian_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit(thousand)));
    }
    if rest > 0 {
        parts.push(three_digit(rest));
    }
    parts.join(" ")
}

/// The English words representation of a whole-rupee amount.
///
/// Zero reads "Zero Only"; everything else ends "Rupees Only", with a
/// "Minus" prefix for negative amounts (refund balances). Fractional paise
/// are truncated; the record never carries any.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pagar_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(dec!(0)), "Zero Only");
/// assert_eq!(
///     amount_in_words(dec!(105152)),
///     "One Lakh Five Thousand One Hundred Fifty Two Rupees Only"
/// );
/// assert_eq!(amount_in_words(dec!(-500)), "Minus Five Hundred Rupees Only");
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    let truncated = amount.trunc();
    if truncated.is_zero() {
        return "Zero Only".to_string();
    }
    let magnitude: u64 = truncated.abs().try_into().unwrap_or(u64::MAX);
    let words = indian_words(magnitude);
    if truncated.is_sign_negative() {
        format!("Minus {words} Rupees Only")
    } else {
        format!("{words} Rupees Only")
    }
}

/// Formats a whole-rupee amount with Indian digit grouping.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pagar_core::words::format_inr;
///
/// assert_eq!(format_inr(dec!(1145448)), "11,45,448");
/// assert_eq!(format_inr(dec!(-256780)), "-2,56,780");
/// assert_eq!(format_inr(dec!(999)), "999");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let truncated = amount.trunc();
    let digits = truncated.abs().to_string();
    let sign = if truncated.is_sign_negative() { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    // Rightmost group of three, then groups of two.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut index = head_bytes.len();
    while index > 2 {
        groups.push(&head[index - 2..index]);
        index -= 2;
    }
    groups.push(&head[..index]);
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}

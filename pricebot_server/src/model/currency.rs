//! Currency amount formatting in the en-US convention.
//!
//! Renders amounts the way `en-US` currency formatting does: the currency
//! symbol in front, `,` as thousands separator, and the currency's usual
//! number of fraction digits. Codes without a dedicated symbol are written
//! as `CODE` followed by a non-breaking space.
//!
//! Rounding works on the shortest decimal form of the amount (the one `{}`
//! prints) and rounds halves away from zero, so `1.005` becomes `1.01`.

use pricebot_common::BotError;

/// Non-breaking space placed between a bare currency code and the amount.
const NBSP: char = '\u{a0}';

struct CurrencyStyle {
    symbol: Option<&'static str>,
    fraction_digits: usize,
}

fn style_for(code: &str) -> CurrencyStyle {
    let symbol = match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "CNY" => Some("CN¥"),
        "KRW" => Some("₩"),
        "BRL" => Some("R$"),
        "MXN" => Some("MX$"),
        "HKD" => Some("HK$"),
        "NZD" => Some("NZ$"),
        "TWD" => Some("NT$"),
        "ILS" => Some("₪"),
        "VND" => Some("₫"),
        "PHP" => Some("₱"),
        _ => None,
    };
    let fraction_digits = match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "PYG" | "UGX" | "XAF" | "XOF" | "RWF" | "KMF"
        | "DJF" | "GNF" | "VUV" | "XPF" | "BIF" | "MMK" | "IQD" | "IRR" | "LAK" | "LBP" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" | "LYD" => 3,
        _ => 2,
    };
    CurrencyStyle {
        symbol,
        fraction_digits,
    }
}

/// Round `amount.abs()` to `fraction_digits`, half away from zero.
///
/// Returns the integer and fraction digit strings.
fn round_decimal(amount: f64, fraction_digits: usize) -> (String, String) {
    let shortest = amount.abs().to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(fraction_digits))
        .collect();

    if fraction.as_bytes().get(fraction_digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - fraction_digits;
    let integer = digits[..split].iter().map(|&d| d as char).collect();
    let fraction = digits[split..].iter().map(|&d| d as char).collect();
    (integer, fraction)
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format `amount` as a currency string for the given code (any case).
///
/// Fails when the code is not three ASCII letters.
pub fn format_currency(amount: f64, code: &str) -> Result<String, BotError> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(BotError::InvalidCurrency(code));
    }
    let style = style_for(&code);

    let (integer, fraction) = round_decimal(amount, style.fraction_digits);
    let mut number = group_thousands(&integer);
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(&fraction);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    Ok(match style.symbol {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}{}{}", sign, code, NBSP, number),
    })
}

/// Format an amount in the Brazilian convention: `R$ 1.234,56`.
///
/// Thousands are separated with a dot, the decimal separator is a comma.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_sign_loss)]
pub fn brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index != 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {sign}{grouped},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ok() {
        assert_eq!(brl(0.0), "R$ 0,00");
    }

    #[test]
    fn grouping_ok() {
        assert_eq!(brl(1234.56), "R$ 1.234,56");
        assert_eq!(brl(1_000_000.5), "R$ 1.000.000,50");
    }

    #[test]
    fn rounding_ok() {
        assert_eq!(brl(0.005), "R$ 0,01");
    }

    #[test]
    fn negative_ok() {
        assert_eq!(brl(-12.3), "R$ -12,30");
    }
}

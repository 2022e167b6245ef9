//! Placeholder substitution for shopper-facing messages.

/// Replaces every `{{key}}` in `template` for each supplied key.
///
/// Keys missing from the template are ignored; placeholders without a
/// supplied key are left as they are.
pub fn render(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{{{key}}}}}"), value)
        })
}

/// Shortest plain rendering of a number: `5`, `7.5`, `0.01`.
pub fn format_number(value: f64) -> String {
    // -0.0 + 0.0 is +0.0
    format!("{}", value + 0.0)
}

/// Rounds half away from zero to two decimals, then renders without trailing zeros.
pub fn format_amount(value: f64) -> String {
    format_number((value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            render("{{percentage}}% now, {{percentage}}% always", &[("percentage", "5")]),
            "5% now, 5% always"
        );
    }

    #[test]
    fn replaces_multiple_keys() {
        assert_eq!(
            render(
                "Spend {{remaining}} more and get {{percentage}} % off.",
                &[("percentage", "10"), ("remaining", "50")]
            ),
            "Spend 50 more and get 10 % off."
        );
    }

    #[test]
    fn unknown_and_unsupplied_keys() {
        assert_eq!(render("no placeholders", &[("percentage", "5")]), "no placeholders");
        assert_eq!(render("{{remaining}} left", &[("percentage", "5")]), "{{remaining}} left");
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn amounts_round_to_cents() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(49.5), "49.5");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(99.999), "100");
        assert_eq!(format_amount(100.01 - 60.0), "40.01");
        assert_eq!(format_amount(-0.001), "0");
    }
}

// Formato de presentación (sin estado)

/// Redondeo al entero más cercano; .5 sube hacia +∞ como `Math.round`
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

/// `15.4` → `"15°C"`
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_temperature(celsius))
}

/// Mayúscula en la primera letra de cada palabra ("light rain" → "Light Rain")
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && !in_word {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        in_word = is_word_char;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_temperature() {
        assert_eq!(round_temperature(15.4), 15);
        assert_eq!(round_temperature(15.5), 16);
        assert_eq!(round_temperature(-0.4), 0);
        assert_eq!(round_temperature(-2.5), -2);
        assert_eq!(round_temperature(-2.6), -3);
        assert_eq!(format_temperature(14.6), "15°C");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("light rain"), "Light Rain");
        assert_eq!(capitalize_words("overcast clouds"), "Overcast Clouds");
        assert_eq!(capitalize_words("  few   clouds "), "  Few   Clouds ");
        assert_eq!(capitalize_words("thunderstorm with heavy-rain"), "Thunderstorm With Heavy-Rain");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_keeps_existing_case() {
        assert_eq!(capitalize_words("Clear SKY"), "Clear SKY");
        assert_eq!(capitalize_words("érable rouge"), "Érable Rouge");
    }
}

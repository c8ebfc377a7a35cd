// ============================================================================
// FORMATO NUMÉRICO - Agrupar dígitos de 3 en 3 con espacios
// ============================================================================

/// Valor de entrada del formateador: número, texto o ausente
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Missing,
    Integer(i128),
    Float(f64),
    Text(String),
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput {
            fn from(value: $t) -> Self {
                NumberInput::Integer(value as i128)
            }
        })*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Float(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        NumberInput::Text(value.clone())
    }
}

impl<T: Into<NumberInput>> From<Option<T>> for NumberInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NumberInput::Missing)
    }
}

impl NumberInput {
    /// Representación textual (None si falta o está vacío)
    fn to_text(&self) -> Option<String> {
        match self {
            NumberInput::Missing => None,
            NumberInput::Integer(n) => Some(n.to_string()),
            NumberInput::Float(f) => Some(float_to_text(*f)),
            NumberInput::Text(s) if s.is_empty() => None,
            NumberInput::Text(s) => Some(s.clone()),
        }
    }
}

/// Igual que `String(number)` en JS: notación exponencial fuera de [1e-6, 1e21)
fn float_to_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        // "{:e}" da "1e21" / "1.5e-7"; JS escribe el signo del exponente siempre
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

/// Espacios que elimina `\s` en JS (incluye U+FEFF, excluye U+0085)
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Formatea un número con separación de 3 dígitos por espacio
///
/// Ausente, texto vacío o texto solo con espacios devuelven `"0"`.
/// Se eliminan los espacios de la entrada y se inserta un espacio en cada
/// posición interior de una palabra seguida por un múltiplo de 3 dígitos.
/// Los dígitos decimales (tras un `.` precedido de dígito) no se agrupan.
pub fn format_with_spaces<V: Into<NumberInput>>(value: V) -> String {
    let input: NumberInput = value.into();
    let Some(text) = input.to_text() else {
        return "0".to_string();
    };

    let chars: Vec<char> = text.chars().filter(|c| !is_js_whitespace(*c)).collect();
    if chars.is_empty() {
        return "0".to_string();
    }

    // Longitud de la racha de dígitos que empieza en cada posición
    let mut digit_run = vec![0usize; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        if chars[i].is_ascii_digit() {
            digit_run[i] = digit_run[i + 1] + 1;
        }
    }

    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    let mut in_fraction = false;
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            in_fraction = c == '.' && i > 0 && chars[i - 1].is_ascii_digit();
        } else if !in_fraction
            && i > 0
            && is_word_char(chars[i - 1])
            && digit_run[i] % 3 == 0
        {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty() {
        assert_eq!(format_with_spaces(None::<u64>), "0");
        assert_eq!(format_with_spaces(NumberInput::Missing), "0");
        assert_eq!(format_with_spaces(""), "0");
        assert_eq!(format_with_spaces("   "), "0");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_with_spaces(0), "0");
        assert_eq!(format_with_spaces(0.0), "0");
        assert_eq!(format_with_spaces(-0.0), "0");
        assert_eq!(format_with_spaces("0"), "0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_with_spaces(7), "7");
        assert_eq!(format_with_spaces(999), "999");
        assert_eq!(format_with_spaces(1000), "1 000");
        assert_eq!(format_with_spaces(1_000_000), "1 000 000");
        assert_eq!(format_with_spaces(Some(219_000u64)), "219 000");
        assert_eq!(format_with_spaces(-1234567i64), "-1 234 567");
    }

    #[test]
    fn test_string_matches_number() {
        assert_eq!(format_with_spaces("262800"), "262 800");
        assert_eq!(format_with_spaces("262800"), format_with_spaces(262_800));
        assert_eq!(format_with_spaces(" 26 28 00 "), "262 800");
        assert_eq!(format_with_spaces(String::from("350400")), "350 400");
    }

    #[test]
    fn test_fraction_not_grouped() {
        assert_eq!(format_with_spaces("1234.5678"), "1 234.5678");
        assert_eq!(format_with_spaces(1234.5), "1 234.5");
        assert_eq!(format_with_spaces(".1234"), ".1 234");
    }

    #[test]
    fn test_non_numeric_text() {
        assert_eq!(format_with_spaces("abc"), "abc");
        assert_eq!(format_with_spaces("a1234"), "a1 234");
        assert_eq!(format_with_spaces("id-123456"), "id-123 456");
        assert_eq!(format_with_spaces("12h3456"), "12h3 456");
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(format_with_spaces(f64::NAN), "NaN");
        assert_eq!(format_with_spaces(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_with_spaces(1e21), "1e+21");
        assert_eq!(format_with_spaces(-2.5e22), "-2.5e+22");
        assert_eq!(format_with_spaces(1.5e-7), "1.5e-7");
        // Justo debajo de 1e21 todavía se escriben todos los dígitos
        assert_eq!(format_with_spaces(1e20), "100 000 000 000 000 000 000");
        assert_eq!(format_with_spaces(0.000001), "0.000001");
    }

    #[test]
    fn test_whitespace_set() {
        assert_eq!(format_with_spaces("\u{FEFF}1234"), "1 234");
        assert_eq!(format_with_spaces("1\u{00A0}234\u{3000}567"), "1 234 567");
        // U+0085 no es espacio: se conserva y corta la racha de dígitos
        assert_eq!(format_with_spaces("12\u{0085}34"), "12\u{0085}34");
        assert_eq!(format_with_spaces("\u{0085}"), "\u{0085}");
    }

    #[test]
    fn test_round_trip_digits() {
        let samples = [0u64, 1, 12, 123, 1234, 12345, 123456, 1234567, 98765432101, u64::MAX];
        for n in samples {
            let formatted = format_with_spaces(n);
            assert!(!formatted.starts_with(' ') && !formatted.ends_with(' '));
            let digits: String = formatted.chars().filter(|c| *c != ' ').collect();
            assert_eq!(digits.parse::<u64>().unwrap(), n);
        }
    }
}

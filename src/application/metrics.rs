// Text metrics for the monospace fonts the renderer uses

/// Greedy word-boundary wrap. Whitespace runs collapse to one space and a
/// word longer than `width` keeps a line of its own, unsplit.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Label text for a gauge number: integral values drop the fraction.
pub fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        format!("{}", number)
    }
}

/// Estimated half width of a rendered number, rounded up.
///
/// Counts the integer digits of the magnitude plus one symbol each for a
/// minus sign and a decimal point.
pub fn number_half_width(number: f64, glyph_width: i32) -> i32 {
    let mut symbols = 0;
    if number < 0.0 {
        symbols += 1;
    }
    let magnitude = number.abs();
    if magnitude.fract() != 0.0 {
        symbols += 1;
    }
    let digits = if magnitude >= 1.0 {
        (magnitude.trunc() as u64).to_string().len() as i32
    } else {
        1
    };

    ((digits + symbols) * glyph_width + 1) / 2
}

use unicode_width::UnicodeWidthStr;

/// Pads `text` on both sides to `width` terminal columns. Wide (CJK)
/// characters count as two columns. Text wider than `width` is returned as is.
pub fn center_in(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_owned();
    }

    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

pub fn date_label(day: u32, marker: Option<char>) -> String {
    match marker {
        Some(c) => format!("{}{:>2}", c, day),
        None => format!("{:>2}", day),
    }
}

pub fn month_label(label: &str, marker: Option<char>) -> String {
    match marker {
        Some(c) => format!("{}{}", label, c),
        None => label.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_by_display_width() {
        assert_eq!(center_in("Jan", 7), "  Jan  ");
        assert_eq!(center_in("Th10", 7), " Th10  ");
        assert_eq!(center_in("十一月", 7), "十一月 ");
        assert_eq!(center_in("周日", 7).width(), 7);
        assert_eq!(center_in("toolongtext", 7), "toolongtext");
    }

    #[test]
    fn labels_with_markers() {
        assert_eq!(date_label(5, Some('*')), "* 5");
        assert_eq!(date_label(17, None), "17");
        assert_eq!(month_label("Jan", Some('\'')), "Jan'");
        assert_eq!(month_label("Feb", None), "Feb");
    }
}

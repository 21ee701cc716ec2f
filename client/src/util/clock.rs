//! Calendar helpers.

/// Current calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} ООО «Тектоника». Все права защищены.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_includes_year() {
        assert_eq!(copyright_line(2026), "© 2026 ООО «Тектоника». Все права защищены.");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}

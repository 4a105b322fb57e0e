use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::registration::RegistrationInput;

static BIRTH_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").unwrap());

/// Checks every field and collects the errors, never stopping at the first
/// one. Errors come back in field order (name, phone, email, birth date);
/// an empty list means the submission is accepted.
pub fn validate(input: &RegistrationInput) -> Vec<String> {
    let mut errors = Vec::new();

    let full_name = input.full_name.as_deref().unwrap_or("");
    if full_name.trim().chars().count() < 3 {
        errors.push("Введите ФИО (минимум 3 символа)".to_string());
    }

    let phone = input.phone.as_deref().unwrap_or("");
    if phone.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
        errors.push("Введите корректный телефон".to_string());
    }

    let email = input.email.as_deref().unwrap_or("");
    if !(email.contains('@') && email.contains('.')) {
        errors.push("Введите корректный email".to_string());
    }

    match input.birth_date.as_deref() {
        None | Some("") => errors.push("Введите дату рождения".to_string()),
        Some(raw) => {
            if let Err(message) = check_birth_date(raw) {
                errors.push(message.to_string());
            }
        }
    }

    errors
}

/// Pattern and range checks for `DD.MM.YYYY`. Ranges only: there is no
/// days-per-month table and no leap-year logic, so `31.02.2000` passes.
pub fn check_birth_date(raw: &str) -> Result<(), &'static str> {
    let caps = match BIRTH_DATE_RE.captures(raw) {
        Some(caps) => caps,
        None => return Err("Формат даты: ДД.ММ.ГГГГ"),
    };

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    if !(1900..=2020).contains(&year) {
        return Err("Год рождения должен быть 1900-2020");
    }
    if !(1..=12).contains(&month) {
        return Err("Некорректный месяц");
    }
    if !(1..=31).contains(&day) {
        return Err("Некорректный день");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        full_name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        birth_date: Option<&str>,
    ) -> RegistrationInput {
        RegistrationInput {
            full_name: full_name.map(str::to_string),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            birth_date: birth_date.map(str::to_string),
        }
    }

    #[test]
    fn empty_submission_reports_every_field_in_order() {
        let errors = validate(&RegistrationInput::default());
        assert_eq!(
            errors,
            vec![
                "Введите ФИО (минимум 3 символа)",
                "Введите корректный телефон",
                "Введите корректный email",
                "Введите дату рождения",
            ]
        );
    }

    #[test]
    fn valid_submission_passes() {
        let errors = validate(&input(
            Some("Иванов Иван"),
            Some("+7 (999) 123-45-67"),
            Some("ivan@example.com"),
            Some("15.06.1990"),
        ));
        assert!(errors.is_empty());
    }

    #[test]
    fn short_name_is_rejected_even_after_trim() {
        let errors = validate(&input(
            Some("  ив  "),
            Some("89991234567"),
            Some("ivan@example.com"),
            Some("15.06.1990"),
        ));
        assert_eq!(errors, vec!["Введите ФИО (минимум 3 символа)"]);
    }

    #[test]
    fn three_cyrillic_chars_count_as_a_name() {
        let errors = validate(&input(
            Some("Яна"),
            Some("89991234567"),
            Some("yana@example.com"),
            Some("15.06.1990"),
        ));
        assert!(errors.is_empty());
    }

    #[test]
    fn phone_needs_ten_digits_regardless_of_punctuation() {
        let errors = validate(&input(
            Some("Иванов Иван"),
            Some("+7 (999) 123-45"),
            Some("ivan@example.com"),
            Some("15.06.1990"),
        ));
        assert_eq!(errors, vec!["Введите корректный телефон"]);
    }

    #[test]
    fn bad_email_is_the_only_error_when_the_rest_is_valid() {
        let errors = validate(&input(
            Some("Иванов Иван"),
            Some("89991234567"),
            Some("not-an-email"),
            Some("15.06.1990"),
        ));
        assert_eq!(errors, vec!["Введите корректный email"]);
    }

    #[test]
    fn birth_date_wrong_shape_reports_format() {
        assert_eq!(check_birth_date("1990.06.15"), Err("Формат даты: ДД.ММ.ГГГГ"));
        assert_eq!(check_birth_date("1.6.1990"), Err("Формат даты: ДД.ММ.ГГГГ"));
        assert_eq!(check_birth_date(" 15.06.1990"), Err("Формат даты: ДД.ММ.ГГГГ"));
    }

    #[test]
    fn birth_date_ranges() {
        assert_eq!(check_birth_date("15.06.1990"), Ok(()));
        assert_eq!(check_birth_date("01.01.1900"), Ok(()));
        assert_eq!(check_birth_date("31.12.2020"), Ok(()));
        assert_eq!(
            check_birth_date("15.06.1899"),
            Err("Год рождения должен быть 1900-2020")
        );
        assert_eq!(
            check_birth_date("15.06.2021"),
            Err("Год рождения должен быть 1900-2020")
        );
        assert_eq!(check_birth_date("15.13.2000"), Err("Некорректный месяц"));
        assert_eq!(check_birth_date("15.00.2000"), Err("Некорректный месяц"));
        assert_eq!(check_birth_date("32.12.2000"), Err("Некорректный день"));
        assert_eq!(check_birth_date("00.12.2000"), Err("Некорректный день"));
    }

    #[test]
    fn month_is_checked_before_day() {
        // 32.13.2000 is wrong on both counts; the month message wins.
        assert_eq!(check_birth_date("32.13.2000"), Err("Некорректный месяц"));
    }

    #[test]
    fn impossible_calendar_dates_still_pass_the_range_check() {
        assert_eq!(check_birth_date("31.02.2000"), Ok(()));
    }
}

use chrono::NaiveDate;
use std::fmt;

/// chrono pattern for `dd.mm.yyyy`, used for both parsing and rendering.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The three free-text fields, labelled the way the user sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Surname,
    GivenName,
    Patronymic,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Surname => "Фамилия",
            Field::GivenName => "Имя",
            Field::Patronymic => "Отчество",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Canonical single-character symbol written to the output file.
    pub fn symbol(&self) -> char {
        match self {
            Gender::Male => 'м',
            Gender::Female => 'ж',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One validated person, built from a single input line and dropped after it is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub surname: String,
    pub given_name: String,
    pub patronymic: String,
    pub birth_date: NaiveDate,
    pub phone_number: i64,
    pub gender: Gender,
}

impl PersonRecord {
    /// The persisted line, without its terminator.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.surname,
            self.given_name,
            self.patronymic,
            self.birth_date.format(DATE_FORMAT),
            self.phone_number,
            self.gender
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivanov() -> PersonRecord {
        PersonRecord {
            surname: "Иванов".into(),
            given_name: "Иван".into(),
            patronymic: "Иванович".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone_number: 1234567890,
            gender: Gender::Male,
        }
    }

    #[test]
    fn renders_six_space_separated_fields() {
        assert_eq!(
            ivanov().to_line(),
            "Иванов Иван Иванович 01.01.1990 1234567890 м"
        );
    }

    #[test]
    fn date_is_zero_padded() {
        let mut record = ivanov();
        record.birth_date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert!(record.to_line().contains(" 04.03.0987 "));
    }

    #[test]
    fn negative_phone_keeps_sign() {
        let mut record = ivanov();
        record.phone_number = -42;
        record.gender = Gender::Female;
        assert!(record.to_line().ends_with(" -42 ж"));
    }

    #[test]
    fn field_labels_are_localized() {
        assert_eq!(Field::Surname.to_string(), "Фамилия");
        assert_eq!(Field::GivenName.to_string(), "Имя");
        assert_eq!(Field::Patronymic.to_string(), "Отчество");
    }
}

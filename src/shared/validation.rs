use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating response-team contact fields
    /// Accepts an email address or a phone number (digits, spaces, +, -, parentheses)
    /// - Valid: "equipo@lima.gob.pe", "+51 987 654 321", "(01) 315-1300"
    /// - Invalid: "sin-contacto", "equipo@", "tel: pronto"
    pub static ref TEAM_CONTACT_REGEX: Regex =
        Regex::new(r"^(?:[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}|\+?[0-9][0-9 ()\-]{5,})$")
            .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_contact_regex_valid() {
        assert!(TEAM_CONTACT_REGEX.is_match("equipo@lima.gob.pe"));
        assert!(TEAM_CONTACT_REGEX.is_match("limpieza.municipal@callao.pe"));
        assert!(TEAM_CONTACT_REGEX.is_match("+51 987 654 321"));
        assert!(TEAM_CONTACT_REGEX.is_match("987654321"));
        assert!(TEAM_CONTACT_REGEX.is_match("(01) 315-1300"));
    }

    #[test]
    fn test_team_contact_regex_invalid() {
        assert!(!TEAM_CONTACT_REGEX.is_match("")); // empty
        assert!(!TEAM_CONTACT_REGEX.is_match("sin-contacto")); // neither email nor phone
        assert!(!TEAM_CONTACT_REGEX.is_match("equipo@")); // truncated email
        assert!(!TEAM_CONTACT_REGEX.is_match("tel: pronto")); // free text
    }
}

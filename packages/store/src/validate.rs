//! Field checks shared by the login, register and dashboard forms.
//!
//! Each check returns the message to show under the field, or `None` when the
//! value is acceptable.

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_REGISTER_NAME_LEN: usize = 3;

pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        None
    } else {
        Some("Enter a valid email".to_string())
    }
}

pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters"))
    } else {
        None
    }
}

/// Password on an edit form: blank keeps the current one.
pub fn optional_password(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        password(value)
    }
}

/// Self-service registration asks for a stronger password.
pub fn registration_password(value: &str) -> Option<String> {
    password(value)
        .or_else(|| {
            (!value.chars().any(|c| c.is_ascii_uppercase()))
                .then(|| "Must contain at least one uppercase letter".to_string())
        })
        .or_else(|| {
            (!value.chars().any(|c| c.is_ascii_digit()))
                .then(|| "Must contain at least one number".to_string())
        })
}

pub fn registration_name(value: &str) -> Option<String> {
    required(value, "Full name").or_else(|| {
        (value.trim().chars().count() < MIN_REGISTER_NAME_LEN)
            .then(|| format!("Name must be at least {MIN_REGISTER_NAME_LEN} characters"))
    })
}

/// Course duration typed into a text field.
pub fn duration(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err("Duration must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err("Duration must be a number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(email("ada@example.com").is_none());
        assert_eq!(email("").as_deref(), Some("Email is required"));
        assert!(email("ada").is_some());
        assert!(email("ada@localhost").is_some());
        assert!(email("@example.com").is_some());
        assert!(email("a da@example.com").is_some());
    }

    #[test]
    fn test_passwords() {
        assert!(password("secret").is_none());
        assert!(password("short").is_some());
        assert!(optional_password("").is_none());
        assert!(optional_password("abc").is_some());
        assert_eq!(
            registration_password("secret1").as_deref(),
            Some("Must contain at least one uppercase letter")
        );
        assert_eq!(
            registration_password("Secrets").as_deref(),
            Some("Must contain at least one number")
        );
        assert!(registration_password("Secret1").is_none());
    }

    #[test]
    fn test_registration_name() {
        assert_eq!(registration_name(" ").as_deref(), Some("Full name is required"));
        assert!(registration_name("Al").is_some());
        assert!(registration_name("Ada").is_none());
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration(" 12 "), Ok(12));
        assert!(duration("0").is_err());
        assert!(duration("twelve").is_err());
    }
}

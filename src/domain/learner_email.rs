use validator::validate_email;

/// The address an offer assignment is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerEmail(String);

impl LearnerEmail {
    pub fn parse(s: String) -> Result<LearnerEmail, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid learner email."))
        }
    }
}

impl AsRef<str> for LearnerEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LearnerEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

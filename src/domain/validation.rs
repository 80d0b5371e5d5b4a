use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TimestampOutOfRange { value: i64 },
    MissingNotificationContact,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TimestampOutOfRange { value } => {
                write!(f, "timestamp out of range: {value}")
            }
            Self::MissingNotificationContact => write!(
                f,
                "either notification_mobile or notification_email must be provided"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

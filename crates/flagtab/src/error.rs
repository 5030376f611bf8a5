#[derive(Debug)]
pub enum Error {
    Unknown(String),
    Missing(String),
    Value { flag: String, value: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(flag) => write!(f, "unknown flag: -{}", flag),
            Self::Missing(flag) => write!(f, "no value for flag: -{}", flag),
            Self::Value { flag, value } => {
                write!(f, "cannot parse '{}' for flag: -{}", value, flag)
            }
        }
    }
}

impl std::error::Error for Error {}

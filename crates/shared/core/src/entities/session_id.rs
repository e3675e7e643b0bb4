use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of a FIX session: `BeginString:SenderCompID->TargetCompID[:Qualifier]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId {
    pub begin_string: String,
    pub sender_comp_id: String,
    pub target_comp_id: String,
    pub session_qualifier: Option<String>,
}

/// Errors produced when parsing a session id from its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSessionIdError {
    #[error("missing ':' after begin string in {0:?}")]
    MissingBeginString(String),

    #[error("missing '->' between sender and target in {0:?}")]
    MissingArrow(String),

    #[error("empty {field} in {input:?}")]
    EmptyField { field: &'static str, input: String },
}

impl SessionId {
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
            session_qualifier: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.session_qualifier = Some(qualifier.into());
        self
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.begin_string, self.sender_comp_id, self.target_comp_id
        )?;
        if let Some(qualifier) = &self.session_qualifier {
            write!(f, ":{}", qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for SessionId {
    type Err = ParseSessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (begin_string, rest) = s
            .split_once(':')
            .ok_or_else(|| ParseSessionIdError::MissingBeginString(s.to_string()))?;
        let (sender, rest) = rest
            .split_once("->")
            .ok_or_else(|| ParseSessionIdError::MissingArrow(s.to_string()))?;
        let (target, qualifier) = match rest.split_once(':') {
            Some((target, qualifier)) => (target, Some(qualifier)),
            None => (rest, None),
        };

        let non_empty = |field: &'static str, value: &str| {
            if value.is_empty() {
                Err(ParseSessionIdError::EmptyField {
                    field,
                    input: s.to_string(),
                })
            } else {
                Ok(value.to_string())
            }
        };

        Ok(SessionId {
            begin_string: non_empty("begin string", begin_string)?,
            sender_comp_id: non_empty("sender comp id", sender)?,
            target_comp_id: non_empty("target comp id", target)?,
            session_qualifier: qualifier
                .map(|q| non_empty("session qualifier", q))
                .transpose()?,
        })
    }
}

impl TryFrom<String> for SessionId {
    type Error = ParseSessionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.to_string()
    }
}

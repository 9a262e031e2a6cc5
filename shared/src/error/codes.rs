//! Unified error codes for the Chama tracker
//!
//! Error codes are shared by the server and any client that consumes the
//! JSON envelope. They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Reminder errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Member ====================
    /// Member not found
    MemberNotFound = 1001,
    /// Phone number does not match the regional mobile format
    InvalidPhoneNumber = 1002,
    /// Monthly contribution is below the minimum or off-step
    InvalidContribution = 1003,
    /// Member name is empty or too long
    InvalidMemberName = 1004,

    // ==================== 2xxx: Reminder ====================
    /// Reminder message is empty
    ReminderMessageEmpty = 2001,
    /// Reminder has no recipients
    ReminderNoRecipients = 2002,
    /// Reminder template not found
    ReminderTemplateNotFound = 2003,
    /// Reminder dispatch queue is full
    ReminderQueueFull = 2004,
    /// Reminder dispatcher has shut down
    ReminderDispatcherClosed = 2005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Request timed out
    TimeoutError = 9003,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Member
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::InvalidPhoneNumber => "Invalid phone number format",
            ErrorCode::InvalidContribution => "Invalid monthly contribution",
            ErrorCode::InvalidMemberName => "Invalid member name",

            // Reminder
            ErrorCode::ReminderMessageEmpty => "Reminder message is empty",
            ErrorCode::ReminderNoRecipients => "Reminder has no recipients",
            ErrorCode::ReminderTemplateNotFound => "Reminder template not found",
            ErrorCode::ReminderQueueFull => "Reminder queue is full, please retry later",
            ErrorCode::ReminderDispatcherClosed => "Reminder dispatcher is not running",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Member
            1001 => Ok(ErrorCode::MemberNotFound),
            1002 => Ok(ErrorCode::InvalidPhoneNumber),
            1003 => Ok(ErrorCode::InvalidContribution),
            1004 => Ok(ErrorCode::InvalidMemberName),

            // Reminder
            2001 => Ok(ErrorCode::ReminderMessageEmpty),
            2002 => Ok(ErrorCode::ReminderNoRecipients),
            2003 => Ok(ErrorCode::ReminderTemplateNotFound),
            2004 => Ok(ErrorCode::ReminderQueueFull),
            2005 => Ok(ErrorCode::ReminderDispatcherClosed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::MemberNotFound.code(), 1001);
        assert_eq!(ErrorCode::InvalidPhoneNumber.code(), 1002);
        assert_eq!(ErrorCode::ReminderMessageEmpty.code(), 2001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::MemberNotFound.is_success());
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1003), Ok(ErrorCode::InvalidContribution));
        assert_eq!(ErrorCode::try_from(2004), Ok(ErrorCode::ReminderQueueFull));
        assert_eq!(ErrorCode::try_from(9003), Ok(ErrorCode::TimeoutError));
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
    }

    #[test]
    fn test_try_from_invalid_u16() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1999), Err(InvalidErrorCode(1999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::MemberNotFound).unwrap();
        assert_eq!(json, "1001");

        let code: ErrorCode = serde_json::from_str("2003").unwrap();
        assert_eq!(code, ErrorCode::ReminderTemplateNotFound);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::InvalidPhoneNumber), "1002");
        assert_eq!(format!("{}", InvalidErrorCode(999)), "invalid error code: 999");
    }
}

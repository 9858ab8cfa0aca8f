//! MAC status codes.
//!
//! Numeric values follow the G3 MAC specification; the same code space is
//! used by both medium MACs and by the access layer, so a status can be
//! forwarded upward unchanged.

use core::fmt;

/// Result code of a MAC service primitive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum MacStatus {
    Success = 0x00,
    AlternatePanIdDetection = 0x80,
    QueueFull = 0xD0,
    CounterError = 0xDB,
    UnsupportedSecurity = 0xDF,
    ChannelAccessFailure = 0xE1,
    Denied = 0xE2,
    SecurityError = 0xE4,
    FrameTooLong = 0xE5,
    InvalidHandle = 0xE7,
    InvalidParameter = 0xE8,
    NoAck = 0xE9,
    NoShortAddress = 0xEC,
    TransactionOverflow = 0xF1,
    UnavailableKey = 0xF3,
    UnsupportedAttribute = 0xF4,
    InvalidIndex = 0xF9,
    LimitReached = 0xFA,
    ReadOnly = 0xFB,
}

impl MacStatus {
    pub fn is_success(self) -> bool {
        self == MacStatus::Success
    }
}

impl fmt::Display for MacStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MacStatus::Success => "SUCCESS",
            MacStatus::AlternatePanIdDetection => "ALTERNATE_PANID_DETECTION",
            MacStatus::QueueFull => "QUEUE_FULL",
            MacStatus::CounterError => "COUNTER_ERROR",
            MacStatus::UnsupportedSecurity => "UNSUPPORTED_SECURITY",
            MacStatus::ChannelAccessFailure => "CHANNEL_ACCESS_FAILURE",
            MacStatus::Denied => "DENIED",
            MacStatus::SecurityError => "SECURITY_ERROR",
            MacStatus::FrameTooLong => "FRAME_TOO_LONG",
            MacStatus::InvalidHandle => "INVALID_HANDLE",
            MacStatus::InvalidParameter => "INVALID_PARAMETER",
            MacStatus::NoAck => "NO_ACK",
            MacStatus::NoShortAddress => "NO_SHORT_ADDRESS",
            MacStatus::TransactionOverflow => "TRANSACTION_OVERFLOW",
            MacStatus::UnavailableKey => "UNAVAILABLE_KEY",
            MacStatus::UnsupportedAttribute => "UNSUPPORTED_ATTRIBUTE",
            MacStatus::InvalidIndex => "INVALID_INDEX",
            MacStatus::LimitReached => "LIMIT_REACHED",
            MacStatus::ReadOnly => "READ_ONLY",
        };
        write!(f, "{name}")
    }
}

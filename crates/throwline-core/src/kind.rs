//! The closed set of raisable error kinds

use core::fmt;

/// Category of a raised error.
///
/// The first ten kinds are software-raised; `FaultSegv` is reserved for the
/// fault bridge and marks an invalid memory access converted to a raise.
/// Kinds carry no severity ordering; dispatch is by identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// Argument outside the callee's accepted domain
    InvalidArgument = 0,

    /// Index or position outside a valid range
    OutOfRange = 1,

    /// Length exceeds what the operation can represent
    LengthError = 2,

    /// Mathematical domain violation
    DomainError = 3,

    /// Broken precondition detectable before running the operation
    LogicError = 4,

    /// Failure only detectable while the operation runs
    RuntimeError = 5,

    /// Arithmetic result too large to represent
    OverflowError = 6,

    /// Arithmetic result too small to represent
    UnderflowError = 7,

    /// Computed result outside the representable range
    RangeError = 8,

    /// Anything that fits no other kind
    UnknownError = 9,

    /// Hardware invalid-memory-access fault (raised only by the fault bridge)
    FaultSegv = 10,
}

impl ErrorKind {
    /// Number of kinds
    pub const COUNT: usize = 11;

    /// Every kind, in declaration order
    pub const ALL: [ErrorKind; Self::COUNT] = [
        ErrorKind::InvalidArgument,
        ErrorKind::OutOfRange,
        ErrorKind::LengthError,
        ErrorKind::DomainError,
        ErrorKind::LogicError,
        ErrorKind::RuntimeError,
        ErrorKind::OverflowError,
        ErrorKind::UnderflowError,
        ErrorKind::RangeError,
        ErrorKind::UnknownError,
        ErrorKind::FaultSegv,
    ];

    /// Stable display name used in diagnostic blocks and test assertions.
    ///
    /// Names are part of the diagnostic format; never repurpose one.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::LengthError => "LENGTH_ERROR",
            ErrorKind::DomainError => "DOMAIN_ERROR",
            ErrorKind::LogicError => "LOGIC_ERROR",
            ErrorKind::RuntimeError => "RUNTIME_ERROR",
            ErrorKind::OverflowError => "OVERFLOW_ERROR",
            ErrorKind::UnderflowError => "UNDERFLOW_ERROR",
            ErrorKind::RangeError => "RANGE_ERROR",
            ErrorKind::UnknownError => "UNKNOWN_ERROR",
            ErrorKind::FaultSegv => "FAULT_SEGV",
        }
    }

    /// True for the kind raised by the fault bridge rather than software
    #[inline]
    pub const fn is_hardware(&self) -> bool {
        matches!(self, ErrorKind::FaultSegv)
    }
}

impl From<u8> for ErrorKind {
    fn from(v: u8) -> Self {
        match v {
            0 => ErrorKind::InvalidArgument,
            1 => ErrorKind::OutOfRange,
            2 => ErrorKind::LengthError,
            3 => ErrorKind::DomainError,
            4 => ErrorKind::LogicError,
            5 => ErrorKind::RuntimeError,
            6 => ErrorKind::OverflowError,
            7 => ErrorKind::UnderflowError,
            8 => ErrorKind::RangeError,
            10 => ErrorKind::FaultSegv,
            _ => ErrorKind::UnknownError, // Default for invalid values
        }
    }
}

impl From<ErrorKind> for u8 {
    fn from(kind: ErrorKind) -> u8 {
        kind as u8
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_names_nonempty_and_unique() {
        let mut seen = HashSet::new();
        for kind in ErrorKind::ALL {
            let name = kind.display_name();
            assert!(!name.is_empty(), "{:?} has empty display name", kind);
            assert!(seen.insert(name), "duplicate display name {}", name);
        }
        assert_eq!(seen.len(), ErrorKind::COUNT);
    }

    #[test]
    fn display_names_stable() {
        assert_eq!(ErrorKind::InvalidArgument.display_name(), "INVALID_ARGUMENT");
        assert_eq!(ErrorKind::OutOfRange.display_name(), "OUT_OF_RANGE");
        assert_eq!(ErrorKind::LengthError.display_name(), "LENGTH_ERROR");
        assert_eq!(ErrorKind::DomainError.display_name(), "DOMAIN_ERROR");
        assert_eq!(ErrorKind::LogicError.display_name(), "LOGIC_ERROR");
        assert_eq!(ErrorKind::RuntimeError.display_name(), "RUNTIME_ERROR");
        assert_eq!(ErrorKind::OverflowError.display_name(), "OVERFLOW_ERROR");
        assert_eq!(ErrorKind::UnderflowError.display_name(), "UNDERFLOW_ERROR");
        assert_eq!(ErrorKind::RangeError.display_name(), "RANGE_ERROR");
        assert_eq!(ErrorKind::UnknownError.display_name(), "UNKNOWN_ERROR");
        assert_eq!(ErrorKind::FaultSegv.display_name(), "FAULT_SEGV");
    }

    #[test]
    fn display_matches_display_name() {
        for kind in ErrorKind::ALL {
            assert_eq!(format!("{}", kind), kind.display_name());
        }
    }

    #[test]
    fn u8_round_trip() {
        for kind in ErrorKind::ALL {
            let v: u8 = kind.into();
            assert_eq!(ErrorKind::from(v), kind);
        }
        // Out-of-range values collapse to UnknownError
        assert_eq!(ErrorKind::from(200), ErrorKind::UnknownError);
    }

    #[test]
    fn hardware_flag() {
        assert!(ErrorKind::FaultSegv.is_hardware());
        for kind in ErrorKind::ALL {
            if kind != ErrorKind::FaultSegv {
                assert!(!kind.is_hardware(), "{:?} must be software-raised", kind);
            }
        }
    }
}

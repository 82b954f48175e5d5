use std::fmt;
use std::str::FromStr;

use crate::DnsError;

/// Record type codes, with unassigned or unrecognized codes carried
/// through as [`RecordType::Unknown`] so they survive a round trip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Ns,
    Cname,
    Soa,
    Ptr,
    Mx,
    Txt,
    Aaaa,
    Opt,
    Unknown(u16),
}

impl RecordType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => Self::A,
            2 => Self::Ns,
            5 => Self::Cname,
            6 => Self::Soa,
            12 => Self::Ptr,
            15 => Self::Mx,
            16 => Self::Txt,
            28 => Self::Aaaa,
            41 => Self::Opt,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Ns => 2,
            Self::Cname => 5,
            Self::Soa => 6,
            Self::Ptr => 12,
            Self::Mx => 15,
            Self::Txt => 16,
            Self::Aaaa => 28,
            Self::Opt => 41,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::Ns => f.write_str("NS"),
            Self::Cname => f.write_str("CNAME"),
            Self::Soa => f.write_str("SOA"),
            Self::Ptr => f.write_str("PTR"),
            Self::Mx => f.write_str("MX"),
            Self::Txt => f.write_str("TXT"),
            Self::Aaaa => f.write_str("AAAA"),
            Self::Opt => f.write_str("OPT"),
            Self::Unknown(code) => write!(f, "TYPE{code}"),
        }
    }
}

impl FromStr for RecordType {
    type Err = DnsError;

    /// Parses a type mnemonic case insensitively, plus the generic
    /// TYPE<n> form from RFC 3597.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "NS" => Ok(Self::Ns),
            "CNAME" => Ok(Self::Cname),
            "SOA" => Ok(Self::Soa),
            "PTR" => Ok(Self::Ptr),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            "AAAA" => Ok(Self::Aaaa),
            "OPT" => Ok(Self::Opt),
            other => other
                .strip_prefix("TYPE")
                .and_then(|digits| digits.parse().ok())
                .map(Self::from_u16)
                .ok_or_else(|| DnsError::UnknownRecordType(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in [1, 2, 5, 6, 12, 15, 16, 28, 41, 999] {
            assert_eq!(RecordType::from_u16(code).to_u16(), code);
        }
    }

    #[test]
    fn parses_mnemonics_case_insensitively() {
        assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::Aaaa);
        assert_eq!("Mx".parse::<RecordType>().unwrap(), RecordType::Mx);
    }

    #[test]
    fn handles_rfc3597_type_names() {
        assert_eq!(
            "TYPE999".parse::<RecordType>().unwrap(),
            RecordType::Unknown(999)
        );
        assert_eq!("type1".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!(RecordType::Unknown(999).to_string(), "TYPE999");
    }

    #[test]
    fn unknown_mnemonic_is_an_error() {
        assert!("BOGUS".parse::<RecordType>().is_err());
    }
}

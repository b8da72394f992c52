//! Syslog facilities.
use crate::types::Setting;
use crate::{ErrorKind, Result};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A syslog facility.
///
/// The numbering follows the usual syslog table, except that `kern` (0) is
/// not available: application code is not allowed to log as the kernel.
#[allow(missing_docs)]
#[derive(Default, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Facility {
    #[default]
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    Security = 10,
    Ftp = 11,
    Ntp = 12,
    LogAudit = 13,
    LogAlert = 14,
    Clock = 15,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    /// Every facility, in ascending numeric order.
    pub const ALL: [Facility; 23] = [
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::Security,
        Facility::Ftp,
        Facility::Ntp,
        Facility::LogAudit,
        Facility::LogAlert,
        Facility::Clock,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    /// Gets the numeric code of this `Facility`, in `1..=23`.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Gets the name of this `Facility`, in lowercase.
    ///
    /// The `FromStr` implementation accepts exactly these names.
    pub fn name(self) -> &'static str {
        match self {
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::Security => "security",
            Facility::Ftp => "ftp",
            Facility::Ntp => "ntp",
            Facility::LogAudit => "logaudit",
            Facility::LogAlert => "logalert",
            Facility::Clock => "clock",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }

    /// Resolves a configured facility, given either as a number or a name.
    pub fn resolve(setting: &Setting) -> Result<Self> {
        match *setting {
            Setting::Number(n) => Facility::try_from(n),
            Setting::Name(ref s) => s.parse(),
            Setting::Unsupported(ref s) => track_panic!(
                ErrorKind::InvalidFacility(s.clone()),
                "Unknown logger facility requested : {}",
                s
            ),
        }
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facility {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Facility::ALL.iter().find(|f| f.name() == s) {
            Some(f) => Ok(*f),
            None => track_panic!(
                ErrorKind::InvalidFacility(s.to_owned()),
                "Unknown logger facility requested : {}",
                s
            ),
        }
    }
}

impl TryFrom<i64> for Facility {
    type Error = crate::Error;

    fn try_from(value: i64) -> Result<Self> {
        if 0 < value && value <= 23 {
            Ok(Facility::ALL[(value - 1) as usize])
        } else {
            track_panic!(
                ErrorKind::InvalidFacility(value.to_string()),
                "Unknown logger facility requested : {}",
                value
            )
        }
    }
}

/// The facility name table, `kern` excluded.
///
/// # Examples
///
/// ```
/// let table: Vec<_> = prio_logger::facilities().collect();
/// assert_eq!(table.len(), 23);
/// assert_eq!(table[0], ("user", 1));
/// assert_eq!(table[22], ("local7", 23));
/// ```
pub fn facilities() -> impl Iterator<Item = (&'static str, u8)> {
    Facility::ALL.iter().map(|f| (f.name(), f.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_from_str() {
        assert_eq!(Facility::from_str("daemon").ok(), Some(Facility::Daemon));
        assert_eq!(Facility::from_str("local7").ok(), Some(Facility::Local7));

        let e = Facility::from_str("foobar").unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidFacility("foobar".to_owned()));
        assert!(e
            .to_string()
            .contains("Unknown logger facility requested : foobar"));

        // Names are matched exactly.
        assert!(Facility::from_str("User").is_err());
        assert!(Facility::from_str("kern").is_err());
    }

    #[test]
    fn test_facility_codes() {
        for (i, f) in Facility::ALL.iter().enumerate() {
            assert_eq!(f.code() as usize, i + 1);
            assert_eq!(Facility::try_from(i as i64 + 1).ok(), Some(*f));
            assert_eq!(f.name().parse::<Facility>().ok(), Some(*f));
        }
        for n in &[0, 24, 25, -1, i64::MAX] {
            let e = Facility::try_from(*n).unwrap_err();
            assert_eq!(*e.kind(), ErrorKind::InvalidFacility(n.to_string()));
        }
    }

    #[test]
    fn test_resolve_rejects_unsupported_shapes() {
        let e = Facility::resolve(&Setting::Unsupported("{}".to_owned())).unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidFacility("{}".to_owned()));
        assert_eq!(
            Facility::resolve(&Setting::from("cron")).ok(),
            Some(Facility::Cron)
        );
        assert_eq!(Facility::resolve(&Setting::from(2i64)).ok(), Some(Facility::Mail));
    }
}

//! Commonly used types.
use crate::{ErrorKind, Result};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a log record, from `Emerg` (most severe) to `Debug`.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use prio_logger::types::Severity;
///
/// assert_eq!(Severity::default(), Severity::Notice);
/// assert!(Severity::Emerg < Severity::Debug);
/// ```
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Error = 3,
    Warning = 4,
    #[default]
    Notice = 5,
    Info = 6,
    Debug = 7,
}
impl Severity {
    /// Every severity, from the most to the least severe.
    pub const ALL: [Severity; 8] = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Crit,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// The severity behind the `log` alias.
    pub const LOG: Severity = Severity::Notice;

    /// The severity behind the `warn` alias.
    pub const WARN: Severity = Severity::Warning;

    /// Gets the numeric code of this `Severity`, in `0..=7`.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Gets the name of this `Severity`.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Emerg => "emerg",
            Severity::Alert => "alert",
            Severity::Crit => "crit",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Looks up a logging method name, aliases included.
    ///
    /// `log` and `warn` resolve to the very same severities as `notice` and
    /// `warning`.
    ///
    /// ```
    /// use prio_logger::types::Severity;
    ///
    /// assert_eq!(Severity::from_method("log"), Some(Severity::Notice));
    /// assert_eq!(Severity::from_method("warn"), Severity::from_method("warning"));
    /// assert_eq!(Severity::from_method("trace"), None);
    /// ```
    pub fn from_method(name: &str) -> Option<Self> {
        match name {
            "log" => Some(Severity::LOG),
            "warn" => Some(Severity::WARN),
            _ => Severity::ALL.iter().copied().find(|s| s.name() == name),
        }
    }

    /// Computes the syslog PRI value of a message logged at this severity
    /// under `facility`.
    ///
    /// ```
    /// use prio_logger::Facility;
    /// use prio_logger::types::Severity;
    ///
    /// assert_eq!(Severity::Debug.priority(Facility::Syslog), 47);
    /// assert_eq!(Severity::Warning.priority(Facility::User), 12);
    /// ```
    pub fn priority(self, facility: crate::Facility) -> u32 {
        u32::from(self.code()) + u32::from(facility.code()) * 8
    }

    /// Resolves a configured level threshold, given either as a number or a
    /// name.
    ///
    /// Numbers are taken as they are, without range validation.
    pub fn resolve_threshold(setting: &Setting) -> Result<i64> {
        match *setting {
            Setting::Number(n) => Ok(n),
            Setting::Name(ref s) => s.parse::<Severity>().map(|s| i64::from(s.code())),
            Setting::Unsupported(ref s) => track_panic!(
                ErrorKind::InvalidLevel(s.clone()),
                "Unknown logger level requested : {}",
                s
            ),
        }
    }
}
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Severity {
    type Err = crate::Error;
    fn from_str(s: &str) -> Result<Self> {
        match Severity::ALL.iter().find(|l| l.name() == s) {
            Some(l) => Ok(*l),
            None => track_panic!(
                ErrorKind::InvalidLevel(s.to_owned()),
                "Unknown logger level requested : {}",
                s
            ),
        }
    }
}

/// The level name table.
///
/// # Examples
///
/// ```
/// let table: Vec<_> = prio_logger::levels().collect();
/// assert_eq!(table.len(), 8);
/// assert_eq!(table[0], ("emerg", 0));
/// assert_eq!(table[7], ("debug", 7));
/// ```
pub fn levels() -> impl Iterator<Item = (&'static str, u8)> {
    Severity::ALL.iter().map(|s| (s.name(), s.code()))
}

/// A facility or level as given by a caller or a configuration file.
///
/// Deserializing never fails on the shape of the value: anything that is
/// neither an integer nor a string becomes `Unsupported`, and is rejected
/// later, when it is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// A numeric code.
    Number(i64),

    /// A table name, such as `"local0"` or `"debug"`.
    Name(String),

    /// A value of any other shape, described as text.
    Unsupported(String),
}
impl From<i64> for Setting {
    fn from(n: i64) -> Self {
        Setting::Number(n)
    }
}
impl From<i32> for Setting {
    fn from(n: i32) -> Self {
        Setting::Number(i64::from(n))
    }
}
impl From<u8> for Setting {
    fn from(n: u8) -> Self {
        Setting::Number(i64::from(n))
    }
}
impl<'a> From<&'a str> for Setting {
    fn from(s: &'a str) -> Self {
        Setting::Name(s.to_owned())
    }
}
impl From<String> for Setting {
    fn from(s: String) -> Self {
        Setting::Name(s)
    }
}
impl From<crate::Facility> for Setting {
    fn from(f: crate::Facility) -> Self {
        Setting::Number(i64::from(f.code()))
    }
}
impl From<Severity> for Setting {
    fn from(s: Severity) -> Self {
        Setting::Number(i64::from(s.code()))
    }
}
impl Serialize for Setting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Setting::Number(n) => serializer.serialize_i64(n),
            Setting::Name(ref s) => serializer.serialize_str(s),
            Setting::Unsupported(ref s) => Err(ser::Error::custom(format_args!(
                "unsupported setting cannot be serialized: {}",
                s
            ))),
        }
    }
}
impl<'de> Deserialize<'de> for Setting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(SettingVisitor)
    }
}

struct SettingVisitor;
impl<'de> Visitor<'de> for SettingVisitor {
    type Value = Setting;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a name or a number")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Setting, E> {
        Ok(Setting::Unsupported(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Setting, E> {
        Ok(Setting::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Setting, E> {
        if v <= i64::MAX as u64 {
            Ok(Setting::Number(v as i64))
        } else {
            Ok(Setting::Unsupported(v.to_string()))
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Setting, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Setting::Number(v as i64))
        } else {
            Ok(Setting::Unsupported(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Setting, E> {
        Ok(Setting::Name(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Setting, E> {
        Ok(Setting::Name(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Setting, E> {
        Ok(Setting::Unsupported("()".to_owned()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Setting, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Setting::Unsupported("[..]".to_owned()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Setting, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Setting::Unsupported("{..}".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Facility;

    #[test]
    fn severity_names_round_trip_through_from_str() {
        for s in Severity::ALL.iter() {
            assert_eq!(s.name().parse::<Severity>().ok(), Some(*s));
        }
        let e = "trace".parse::<Severity>().unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidLevel("trace".to_owned()));
    }

    #[test]
    fn aliases_are_the_same_severity() {
        assert_eq!(Severity::LOG, Severity::Notice);
        assert_eq!(Severity::WARN, Severity::Warning);
        assert_eq!(Severity::from_method("log"), Severity::from_method("notice"));
        // Aliases are method names, not level names.
        assert!("warn".parse::<Severity>().is_err());
    }

    #[test]
    fn priority_is_severity_plus_facility_times_eight() {
        for f in Facility::ALL.iter() {
            for s in Severity::ALL.iter() {
                assert_eq!(
                    s.priority(*f),
                    u32::from(s.code()) + u32::from(f.code()) * 8
                );
            }
        }
        assert_eq!(Severity::Emerg.priority(Facility::User), 8);
        assert_eq!(Severity::Debug.priority(Facility::Local7), 191);
    }

    #[test]
    fn numeric_thresholds_are_taken_as_is() {
        assert_eq!(Severity::resolve_threshold(&Setting::from(42i64)).ok(), Some(42));
        assert_eq!(Severity::resolve_threshold(&Setting::from(-3i64)).ok(), Some(-3));
        assert_eq!(Severity::resolve_threshold(&Setting::from("info")).ok(), Some(6));

        let e = Severity::resolve_threshold(&Setting::from("foo")).unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidLevel("foo".to_owned()));
        let e = Severity::resolve_threshold(&Setting::Unsupported("true".to_owned())).unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::InvalidLevel("true".to_owned()));
    }
}

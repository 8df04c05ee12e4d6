//! Form parameters for CakeMail requests.

use chrono::NaiveDateTime;

use crate::date;

/// Conversion of a value into the literal string the CakeMail API expects.
pub trait WireValue {
    fn to_wire(&self) -> String;
}

impl WireValue for str {
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for String {
    fn to_wire(&self) -> String {
        self.clone()
    }
}

impl WireValue for bool {
    fn to_wire(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl WireValue for NaiveDateTime {
    fn to_wire(&self) -> String {
        date::format(self)
    }
}

impl<T: WireValue + ?Sized> WireValue for &T {
    fn to_wire(&self) -> String {
        (**self).to_wire()
    }
}

macro_rules! integer_wire_value {
    ($($ty:ty),*) => {
        $(
            impl WireValue for $ty {
                fn to_wire(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_wire_value!(i32, i64, u32, u64);

/// Ordered name/value pairs sent as a form-encoded request body.
///
/// Optional arguments that are unset are never emitted, the server then
/// applies its own default.
///
/// ```
/// use cakemail_client::Parameters;
///
/// let mut params = Parameters::new();
/// params
///     .push("user_key", "abc")
///     .push_opt("client_id", None::<i64>)
///     .push("track_opening", false);
///
/// assert_eq!(params.get("track_opening"), Some("false"));
/// assert_eq!(params.get("client_id"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pairs: Vec<(String, String)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl WireValue) -> &mut Self {
        self.pairs.push((name.into(), value.to_wire()));
        self
    }

    /// Appends a parameter only if it is set.
    pub fn push_opt<V: WireValue>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Appends a parameter only if `condition` holds.
    pub fn push_if(
        &mut self,
        name: impl Into<String>,
        value: impl WireValue,
        condition: bool,
    ) -> &mut Self {
        if condition {
            self.push(name, value);
        }
        self
    }

    /// Returns the first value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

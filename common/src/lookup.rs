/// Outcome of a lookup that may not be backed by ledger data yet.
///
/// `Absent` is a normal miss. `Unimplemented` marks lookups the ledger cannot
/// answer at all; on the wire both collapse to `null` (or a caller supplied
/// default), which keeps the RPC surface stable while the distinction stays
/// visible to library callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Absent,
    Unimplemented,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent | Lookup::Unimplemented => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Lookup<U>) -> Lookup<U> {
        match self {
            Lookup::Found(value) => f(value),
            Lookup::Absent => Lookup::Absent,
            Lookup::Unimplemented => Lookup::Unimplemented,
        }
    }

    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Lookup::Unimplemented)
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::Absent,
        }
    }
}

use std::{borrow::Borrow, fmt, str::FromStr};

use sha2::{Digest, Sha256};

/// Portable public identifier with a string representation.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

/// Number of digest bytes that end up in a synthesized identifier.
const SYNTHESIZED_LEN: usize = 12;

impl Id {
    /// Derive an identifier from stable upstream attributes.
    ///
    /// Used when the upstream payload omits an identifier. The same
    /// name at the same position always yields the same identifier,
    /// so repeated fetches of an unchanged listing are diffable.
    pub fn synthesize(name: &str, position: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update([0]);
        hasher.update(position.to_be_bytes());
        let digest = hasher.finalize();
        bs58::encode(&digest[..SYNTHESIZED_LEN]).into_string().into()
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<String> for Id {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ();
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

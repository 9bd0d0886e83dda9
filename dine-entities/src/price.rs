use std::fmt;

/// A price in minor currency units (e.g. paise).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Price(u64);

impl Price {
    pub const MINOR_UNITS: u64 = 100;

    pub const fn from_minor_units(units: u64) -> Self {
        Self(units)
    }
}

impl From<u64> for Price {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / Self::MINOR_UNITS,
            self.0 % Self::MINOR_UNITS
        )
    }
}

/// Display an optional price, `N/A` if there is none.
pub fn display_price(price: Option<Price>) -> String {
    price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_minor_units_as_major() {
        assert_eq!("250.00", Price::from(25000).to_string());
        assert_eq!("99.05", Price::from(9905).to_string());
        assert_eq!("0.50", Price::from(50).to_string());
    }

    #[test]
    fn display_missing_price() {
        assert_eq!("N/A", display_price(None));
        assert_eq!("1.00", display_price(Some(100.into())));
    }
}

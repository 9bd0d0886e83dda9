use strum::{Display, EnumString};

/// Dietary classification of a menu item.
///
/// There is no "unknown" state: anything that is not
/// positively classified as vegetarian is [`Diet::NonVeg`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Diet {
    Veg,
    #[default]
    NonVeg,
}

impl From<bool> for Diet {
    fn from(is_veg: bool) -> Self {
        if is_veg {
            Self::Veg
        } else {
            Self::NonVeg
        }
    }
}

/// Which items of a menu should be shown.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietFilter {
    pub fn accepts(self, diet: Diet) -> bool {
        match self {
            Self::All => true,
            Self::Veg => diet == Diet::Veg,
            Self::NonVeg => diet == Diet::NonVeg,
        }
    }
}

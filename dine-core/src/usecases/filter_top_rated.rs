use super::prelude::*;

pub const DEFAULT_TOP_RATED_THRESHOLD: f64 = 4.0;

/// Restaurants rated strictly above `threshold`.
///
/// Restaurants without a rating are dropped.
pub fn filter_top_rated(
    all: &[RestaurantSummary],
    threshold: f64,
) -> Result<Vec<RestaurantSummary>> {
    if !threshold.is_finite() {
        return Err(Error::InvalidThreshold(threshold));
    }
    Ok(all
        .iter()
        .filter(|r| r.is_rated_above(threshold))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::super::tests::restaurants;
    use super::*;
    use dine_entities::builders::*;

    #[test]
    fn keep_restaurants_above_threshold() {
        let all = restaurants(&[("A", 4.2), ("B", 4.5), ("C", 4.6)]);
        let top = filter_top_rated(&all, 4.45).unwrap();
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["B", "C"], names);
    }

    #[test]
    fn threshold_is_exclusive() {
        let all = restaurants(&[("A", 4.0), ("B", 4.1)]);
        let top = filter_top_rated(&all, DEFAULT_TOP_RATED_THRESHOLD).unwrap();
        assert_eq!(1, top.len());
        assert_eq!("B", top[0].name);
    }

    #[test]
    fn drop_unrated_restaurants() {
        let all = vec![RestaurantSummary::build().name("New").finish()];
        assert!(filter_top_rated(&all, 0.0).unwrap().is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let all = restaurants(&[("A", 4.2), ("B", 4.5), ("C", 4.6)]);
        let once = filter_top_rated(&all, 4.45).unwrap();
        let twice = filter_top_rated(&once, 4.45).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn reject_invalid_threshold() {
        let all = restaurants(&[("A", 4.2)]);
        assert!(matches!(
            filter_top_rated(&all, f64::NAN),
            Err(Error::InvalidThreshold(_))
        ));
    }
}

use super::prelude::*;

/// Keep only the items accepted by `filter`.
///
/// Sections without any remaining item are dropped, so a broken-out
/// category survives as long as one of its items does.
pub fn filter_menu_sections(sections: &[MenuSection], filter: DietFilter) -> Vec<MenuSection> {
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<_> = section
                .items
                .iter()
                .filter(|item| filter.accepts(item.diet))
                .cloned()
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(MenuSection {
                title: section.title.clone(),
                items,
                is_category: section.is_category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dine_entities::builders::*;

    fn item(id: &str, diet: Diet) -> MenuItem {
        MenuItem::build().id(id).name(id).diet(diet).finish()
    }

    fn sections() -> Vec<MenuSection> {
        vec![
            MenuSection {
                title: "Recommended".into(),
                items: vec![item("paneer", Diet::Veg), item("chicken", Diet::NonVeg)],
                is_category: false,
            },
            MenuSection {
                title: "Kebabs".into(),
                items: vec![item("mutton", Diet::NonVeg)],
                is_category: true,
            },
            MenuSection {
                title: "Desserts".into(),
                items: vec![item("kulfi", Diet::Veg)],
                is_category: true,
            },
        ]
    }

    fn ids(sections: &[MenuSection]) -> Vec<Vec<&str>> {
        sections
            .iter()
            .map(|s| s.items.iter().map(|i| i.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn all_keeps_everything() {
        let all = sections();
        assert_eq!(all, filter_menu_sections(&all, DietFilter::All));
    }

    #[test]
    fn veg_drops_emptied_sections() {
        let veg = filter_menu_sections(&sections(), DietFilter::Veg);
        assert_eq!(vec![vec!["paneer"], vec!["kulfi"]], ids(&veg));
        assert_eq!("Desserts", veg[1].title);
        assert!(veg[1].is_category);
    }

    #[test]
    fn non_veg_drops_emptied_sections() {
        let non_veg = filter_menu_sections(&sections(), DietFilter::NonVeg);
        assert_eq!(vec![vec!["chicken"], vec!["mutton"]], ids(&non_veg));
    }

    #[test]
    fn filters_do_not_narrow_the_source() {
        let all = sections();
        let _ = filter_menu_sections(&all, DietFilter::Veg);
        let non_veg = filter_menu_sections(&all, DietFilter::NonVeg);
        assert_eq!(2, non_veg.len());
    }
}

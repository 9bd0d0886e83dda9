use super::prelude::*;
use crate::extract::{extract_menu_page, menu::unwrap_menu_envelope};

/// Fetch and extract the menu of a single restaurant.
pub fn load_menu<G>(gateway: &G, restaurant_id: &Id) -> Result<MenuPage>
where
    G: MenuGateway + ?Sized,
{
    if !restaurant_id.is_valid() {
        return Err(Error::EmptyRestaurantId);
    }
    let doc = gateway.fetch_menu(restaurant_id)?;
    let data = unwrap_menu_envelope(&doc)?;
    let mut page = extract_menu_page(data);
    if !page.detail.id.is_valid() {
        page.detail.id = restaurant_id.clone();
    }
    if page.sections.is_empty() && page.featured.is_none() {
        log::warn!("No menu sections found for restaurant {restaurant_id}");
    } else {
        log::info!(
            "Loaded {} menu items in {} sections for restaurant {restaurant_id}",
            page.item_count(),
            page.sections.len()
        );
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn reject_empty_id() {
        let gw = FixedMenu(Ok(json!({})));
        assert_eq!(Err(Error::EmptyRestaurantId), load_menu(&gw, &Id::from("")));
    }

    #[test]
    fn report_upstream_message() {
        let gw = FixedMenu(Ok(json!({
            "statusCode": 1,
            "message": "Restaurant closed",
            "data": null
        })));
        let err = load_menu(&gw, &"253".into()).unwrap_err();
        assert_eq!("Restaurant closed", err.to_string());
        assert!(!err.is_transport());
    }

    #[test]
    fn report_error_page() {
        let gw = FixedMenu(Err(FetchError::ErrorPage));
        assert_eq!(
            Err(Error::Fetch(FetchError::ErrorPage)),
            load_menu(&gw, &"253".into())
        );
    }

    #[test]
    fn fill_in_missing_restaurant_id() {
        let gw = FixedMenu(Ok(menu_doc(json!({ "name": "Cafe" }), vec![])));
        let page = load_menu(&gw, &"253".into()).unwrap();
        assert_eq!("253", page.detail.id.as_str());
        assert_eq!("Cafe", page.detail.name);
    }

    #[test]
    fn load_menu_sections() {
        let gw = FixedMenu(Ok(menu_doc(
            json!({ "id": "253", "name": "Cafe" }),
            vec![json!({ "card": { "card": {
                "title": "Recommended",
                "itemCards": [{ "card": { "info": { "id": "1", "name": "Latte", "isVeg": 1 } } }]
            }}})],
        )));
        let page = load_menu(&gw, &"253".into()).unwrap();
        assert_eq!(1, page.item_count());
        assert_eq!("Latte", page.featured.unwrap().items[0].name);
    }
}

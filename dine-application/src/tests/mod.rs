pub mod prelude {

    use std::{cell::RefCell, collections::VecDeque};

    use serde_json::{json, Value};

    pub(crate) use crate::{FetchError, Id, ListingGateway, MenuGateway};

    pub type ListingResponse = Result<Value, FetchError>;
    pub type MenuResponse = Result<Value, FetchError>;

    pub fn listing_doc(restaurants: &[(&str, f64)]) -> Value {
        let restaurants: Vec<_> = restaurants
            .iter()
            .enumerate()
            .map(|(i, (name, rating))| {
                json!({ "info": { "id": i.to_string(), "name": name, "avgRating": rating } })
            })
            .collect();
        json!({
            "statusCode": 0,
            "data": { "cards": [
                { "card": { "card": { "gridElements": {
                    "infoWithStyle": { "restaurants": restaurants }
                }}}}
            ]}
        })
    }

    pub fn section_json(title: &str, items: &[(&str, bool)]) -> Value {
        let items: Vec<_> = items
            .iter()
            .map(|(name, veg)| {
                json!({ "card": { "info": {
                    "id": format!("{title}-{name}"),
                    "name": name,
                    "price": 10000,
                    "isVeg": if *veg { 1 } else { 0 }
                }}})
            })
            .collect();
        json!({ "card": { "card": { "title": title, "itemCards": items } } })
    }

    pub fn menu_doc(info: Value, sections: Vec<Value>) -> Value {
        json!({
            "statusCode": 0,
            "data": { "cards": [
                { "card": { "card": { "info": info } } },
                {},
                { "groupedCard": { "cardGroupMap": { "REGULAR": { "cards": sections } } } }
            ]}
        })
    }

    /// Answers listing requests with prepared responses, in order.
    #[derive(Debug)]
    pub struct ScriptedListing {
        responses: RefCell<VecDeque<ListingResponse>>,
        calls: RefCell<usize>,
    }

    impl ScriptedListing {
        pub fn new(responses: Vec<ListingResponse>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl ListingGateway for ScriptedListing {
        fn fetch_listing(&self) -> ListingResponse {
            *self.calls.borrow_mut() += 1;
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("no more responses".into())))
        }
    }

    /// Answers menu requests with prepared responses and records the requested ids.
    #[derive(Debug)]
    pub struct ScriptedMenu {
        responses: RefCell<VecDeque<MenuResponse>>,
        requested: RefCell<Vec<Id>>,
    }

    impl ScriptedMenu {
        pub fn new(responses: Vec<MenuResponse>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requested: RefCell::new(vec![]),
            }
        }

        pub fn requested_ids(&self) -> Vec<Id> {
            self.requested.borrow().clone()
        }
    }

    impl MenuGateway for ScriptedMenu {
        fn fetch_menu(&self, restaurant_id: &Id) -> MenuResponse {
            self.requested.borrow_mut().push(restaurant_id.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("no more responses".into())))
        }
    }
}

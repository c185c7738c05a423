use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The item as a client describes it. Every field is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BaseItem {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub price: f64,
    pub tax: f64,
}

/// Body for create and partial update. Same fields as [`BaseItem`], all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpsertItem {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Option<f64>,
    pub tax: Option<f64>,
}

/// Full item as returned by the API: base fields plus the server-assigned
/// identifier and timestamps, all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Option<f64>,
    pub tax: Option<f64>,
    pub created_datetime: Option<DateTime<Utc>>,
    pub updated_datetime: Option<DateTime<Utc>>,
}

/// [`BaseItem`] without `price` and `tax`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OmittedTaxPrice {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FindBase {
    pub count: i64,
    pub page: i64,
    pub order: String,
}

/// Query for `GET /items/`: paging fields plus item fields used as filters.
/// Kept flat so it deserializes straight from a query string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindItem {
    pub count: Option<i64>,
    pub page: Option<i64>,
    pub order: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Option<f64>,
    pub tax: Option<f64>,
}

/// Paging half of a [`FindItem`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paging {
    pub count: Option<i64>,
    pub page: Option<i64>,
    pub order: Option<String>,
}

impl From<BaseItem> for UpsertItem {
    fn from(item: BaseItem) -> Self {
        UpsertItem {
            name: Some(item.name),
            model: Some(item.model),
            manufacturer: Some(item.manufacturer),
            price: Some(item.price),
            tax: Some(item.tax),
        }
    }
}

impl From<UpsertItem> for Item {
    fn from(item: UpsertItem) -> Self {
        Item {
            name: item.name,
            model: item.model,
            manufacturer: item.manufacturer,
            price: item.price,
            tax: item.tax,
            ..Default::default()
        }
    }
}

impl From<BaseItem> for Item {
    fn from(item: BaseItem) -> Self {
        UpsertItem::from(item).into()
    }
}

impl From<BaseItem> for OmittedTaxPrice {
    fn from(item: BaseItem) -> Self {
        OmittedTaxPrice {
            name: item.name,
            model: item.model,
            manufacturer: item.manufacturer,
        }
    }
}

impl From<FindBase> for FindItem {
    fn from(find: FindBase) -> Self {
        FindItem {
            count: Some(find.count),
            page: Some(find.page),
            order: Some(find.order),
            ..Default::default()
        }
    }
}

impl Item {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl FindItem {
    pub fn paging(&self) -> Paging {
        Paging {
            count: self.count,
            page: self.page,
            order: self.order.clone(),
        }
    }

    pub fn filter(&self) -> UpsertItem {
        UpsertItem {
            name: self.name.clone(),
            model: self.model.clone(),
            manufacturer: self.manufacturer.clone(),
            price: self.price,
            tax: self.tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_base() -> BaseItem {
        BaseItem {
            name: "Widget".to_string(),
            model: "W-100".to_string(),
            manufacturer: "Acme".to_string(),
            price: 19.99,
            tax: 1.6,
        }
    }

    #[test]
    fn optional_shapes_accept_empty_objects() {
        let upsert: UpsertItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(upsert, UpsertItem::default());

        let item: Item = serde_json::from_value(json!({})).unwrap();
        assert_eq!(item, Item::default());

        let find: FindItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(find, FindItem::default());
    }

    #[test]
    fn base_item_requires_every_field() {
        let missing_tax = json!({
            "name": "Widget",
            "model": "W-100",
            "manufacturer": "Acme",
            "price": 19.99
        });
        assert!(serde_json::from_value::<BaseItem>(missing_tax).is_err());
    }

    #[test]
    fn missing_fields_serialize_as_null() {
        let value = serde_json::to_value(Item::default().with_id(7)).unwrap();
        assert_eq!(value["id"], json!(7));
        assert!(value["name"].is_null());
        assert!(value["created_datetime"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn upsert_wraps_every_base_field() {
        let upsert = UpsertItem::from(sample_base());
        assert_eq!(upsert.name.as_deref(), Some("Widget"));
        assert_eq!(upsert.model.as_deref(), Some("W-100"));
        assert_eq!(upsert.manufacturer.as_deref(), Some("Acme"));
        assert_eq!(upsert.price, Some(19.99));
        assert_eq!(upsert.tax, Some(1.6));
    }

    #[test]
    fn item_from_base_has_no_server_fields() {
        let item = Item::from(sample_base());
        assert_eq!(item.id, None);
        assert_eq!(item.created_datetime, None);
        assert_eq!(item.updated_datetime, None);
        assert_eq!(item.price, Some(19.99));
    }

    #[test]
    fn omitted_drops_price_and_tax() {
        let omitted = OmittedTaxPrice::from(sample_base());
        assert_eq!(
            omitted,
            OmittedTaxPrice {
                name: "Widget".to_string(),
                model: "W-100".to_string(),
                manufacturer: "Acme".to_string(),
            }
        );

        let value = serde_json::to_value(&omitted).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"price"));
        assert!(!keys.contains(&"tax"));
    }

    #[test]
    fn omitted_ignores_extra_keys_but_requires_the_rest() {
        let with_price = json!({
            "name": "Widget",
            "model": "W-100",
            "manufacturer": "Acme",
            "price": 19.99
        });
        assert!(serde_json::from_value::<OmittedTaxPrice>(with_price).is_ok());

        let missing_model = json!({ "name": "Widget", "manufacturer": "Acme" });
        assert!(serde_json::from_value::<OmittedTaxPrice>(missing_model).is_err());
    }

    #[test]
    fn find_item_splits_into_paging_and_filter() {
        let find = FindItem {
            count: Some(10),
            page: Some(2),
            order: Some("name".to_string()),
            manufacturer: Some("Acme".to_string()),
            price: Some(5.0),
            ..Default::default()
        };

        assert_eq!(
            find.paging(),
            Paging { count: Some(10), page: Some(2), order: Some("name".to_string()) }
        );
        assert_eq!(
            find.filter(),
            UpsertItem {
                manufacturer: Some("Acme".to_string()),
                price: Some(5.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn find_item_reads_every_field_from_query_string() {
        let query = actix_web::web::Query::<FindItem>::from_query(
            "count=10&page=2&order=name&name=Widget&model=W-100&manufacturer=Acme&price=19.99&tax=1.6",
        )
        .unwrap()
        .into_inner();

        assert_eq!(
            query,
            FindItem {
                count: Some(10),
                page: Some(2),
                order: Some("name".to_string()),
                name: Some("Widget".to_string()),
                model: Some("W-100".to_string()),
                manufacturer: Some("Acme".to_string()),
                price: Some(19.99),
                tax: Some(1.6),
            }
        );
    }

    #[test]
    fn find_item_rejects_malformed_numbers() {
        assert!(actix_web::web::Query::<FindItem>::from_query("page=1.5").is_err());
        assert!(actix_web::web::Query::<FindItem>::from_query("price=abc").is_err());
    }

    #[test]
    fn find_item_from_find_base_leaves_filters_empty() {
        let find = FindItem::from(FindBase { count: 25, page: 1, order: "price".to_string() });
        assert_eq!(find.count, Some(25));
        assert_eq!(find.order.as_deref(), Some("price"));
        assert_eq!(find.filter(), UpsertItem::default());
    }
}

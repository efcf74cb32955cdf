//! Request bodies and the per-request context the pipelines run against.
//!
//! Bodies arrive as `{ "data": { ... } }`. The fields stay untyped JSON while the
//! validation steps inspect them; once a pipeline passes, the data is converted into
//! the typed DTOs the repositories accept.

use super::ApiError;
use crate::model::{DishCreate, DishUpdate, LineItem, OrderCreate, OrderStatus, OrderUpdate};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The request body wrapper. A `data` that is missing or not an object counts as an
/// empty object.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn into_data(self) -> RequestData {
        self.data.map(RequestData::from).unwrap_or_default()
    }
}

/// The untyped fields of a request body.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RequestData(pub Map<String, Value>);

impl From<Value> for RequestData {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

/// Everything a pipeline step may look at.
#[derive(Debug, Clone)]
pub struct Incoming<T> {
    /// The `{dishId}` / `{orderId}` path parameter, if the route has one.
    pub route_id: Option<String>,
    pub data: RequestData,
    /// The stored entity resolved by the existence guard.
    pub current: Option<T>,
}

impl<T> Incoming<T> {
    pub fn new(data: RequestData) -> Self {
        Self {
            route_id: None,
            data,
            current: None,
        }
    }

    pub fn for_entity(route_id: String, data: RequestData, current: T) -> Self {
        Self {
            route_id: Some(route_id),
            data,
            current: Some(current),
        }
    }
}

/// Largest integer a JSON client can represent exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Interprets a JSON value as an integer in `1..=MAX_SAFE_INTEGER`.
///
/// Floats are accepted when they have no fractional part, so `3.0` is `3`.
pub fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n).filter(|n| (1..=MAX_SAFE_INTEGER).contains(n));
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && n >= 1.0 && n <= MAX_SAFE_INTEGER as f64 {
        Some(n as u64)
    } else {
        None
    }
}

fn missing(resource: &str, field: &str) -> ApiError {
    ApiError::InvalidRequest(format!("{resource} must include a {field}"))
}

impl RequestData {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// A required non-empty string field.
    pub fn text(&self, resource: &str, field: &str) -> Result<String, ApiError> {
        match self.get(field) {
            Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
            _ => Err(missing(resource, field)),
        }
    }

    /// A required field of any type. Absent, `null`, `false`, `0` and `""` count as missing.
    pub fn present(&self, resource: &str, field: &str) -> Result<&Value, ApiError> {
        match self.get(field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(missing(resource, field)),
            Some(Value::String(text)) if text.is_empty() => Err(missing(resource, field)),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(missing(resource, field)),
            Some(value) => Ok(value),
        }
    }

    pub fn price(&self) -> Result<u64, ApiError> {
        self.get("price").and_then(positive_integer).ok_or_else(|| {
            ApiError::InvalidRequest(
                "Dish must have a price that is an integer greater than 0".to_string(),
            )
        })
    }

    /// The order's dish list: a non-empty array whose entries all carry a positive
    /// integer `quantity`. Reports the first offending entry by zero-based index.
    pub fn line_items(&self) -> Result<Vec<LineItem>, ApiError> {
        let items = match self.get("dishes") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => {
                return Err(ApiError::InvalidRequest(
                    "Order must include at least one dish".to_string(),
                ))
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let quantity = item.get("quantity").and_then(positive_integer);
                match (item.as_object(), quantity) {
                    (Some(fields), Some(quantity)) => {
                        let mut dish = fields.clone();
                        dish.remove("quantity");
                        Ok(LineItem { dish, quantity })
                    }
                    _ => Err(ApiError::InvalidRequest(format!(
                        "Dish {index} must have a quantity that is an integer greater than 0"
                    ))),
                }
            })
            .collect()
    }

    pub fn status(&self) -> Result<OrderStatus, ApiError> {
        self.get("status")
            .and_then(Value::as_str)
            .and_then(|status| status.parse().ok())
            .ok_or_else(|| {
                let labels: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
                ApiError::InvalidRequest(format!(
                    "Order must have a status of {}",
                    labels.join(", ")
                ))
            })
    }

    /// The body's `id`, unless it is absent, `null` or `""`.
    pub fn body_id(&self) -> Option<&Value> {
        match self.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) if id.is_empty() => None,
            Some(id) => Some(id),
        }
    }
}

impl TryFrom<&RequestData> for DishCreate {
    type Error = ApiError;

    fn try_from(data: &RequestData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: data.text("Dish", "name")?,
            description: data.text("Dish", "description")?,
            price: data.price()?,
            image_url: data.text("Dish", "image_url")?,
        })
    }
}

impl TryFrom<&RequestData> for DishUpdate {
    type Error = ApiError;

    fn try_from(data: &RequestData) -> Result<Self, Self::Error> {
        let DishCreate {
            name,
            description,
            price,
            image_url,
        } = DishCreate::try_from(data)?;
        Ok(Self {
            name,
            description,
            price,
            image_url,
        })
    }
}

impl TryFrom<&RequestData> for OrderCreate {
    type Error = ApiError;

    fn try_from(data: &RequestData) -> Result<Self, Self::Error> {
        Ok(Self {
            deliver_to: data.text("Order", "deliverTo")?,
            mobile_number: data.text("Order", "mobileNumber")?,
            dishes: data.line_items()?,
        })
    }
}

impl TryFrom<&RequestData> for OrderUpdate {
    type Error = ApiError;

    fn try_from(data: &RequestData) -> Result<Self, Self::Error> {
        let OrderCreate {
            deliver_to,
            mobile_number,
            dishes,
        } = OrderCreate::try_from(data)?;
        Ok(Self {
            deliver_to,
            mobile_number,
            status: data.status()?,
            dishes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> RequestData {
        RequestData::from(value)
    }

    #[test]
    fn positive_integers() {
        assert_eq!(positive_integer(&json!(3)), Some(3));
        assert_eq!(positive_integer(&json!(3.0)), Some(3));
        assert_eq!(positive_integer(&json!(2.5)), None);
        assert_eq!(positive_integer(&json!(0)), None);
        assert_eq!(positive_integer(&json!(-4)), None);
        assert_eq!(positive_integer(&json!("3")), None);
        assert_eq!(positive_integer(&json!(5_000_000_000u64)), Some(5_000_000_000));
        assert_eq!(positive_integer(&json!(MAX_SAFE_INTEGER)), Some(MAX_SAFE_INTEGER));
        assert_eq!(positive_integer(&json!(MAX_SAFE_INTEGER + 1)), None);
        assert_eq!(positive_integer(&json!(1e300)), None);
    }

    #[test]
    fn present_follows_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            let body = data(json!({ "dishes": falsy }));
            let err = body.present("Order", "dishes");
            assert_eq!(
                err,
                Err(ApiError::InvalidRequest("Order must include a dishes".into()))
            );
        }
        assert!(data(json!({ "dishes": [] })).present("Order", "dishes").is_ok());
    }

    #[test]
    fn line_items_name_the_first_bad_index() {
        let err = data(json!({
            "dishes": [{ "id": "a", "quantity": 1 }, { "id": "b" }, { "id": "c", "quantity": 0 }]
        }))
        .line_items()
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::InvalidRequest(
                "Dish 1 must have a quantity that is an integer greater than 0".into()
            )
        );
    }

    #[test]
    fn line_items_keep_the_dish_reference() {
        let items = data(json!({ "dishes": [{ "dishId": 1, "quantity": 2 }] }))
            .line_items()
            .unwrap();
        assert_eq!(items[0].quantity, 2);
        assert_eq!(Value::Object(items[0].dish.clone()), json!({ "dishId": 1 }));
    }

    #[test]
    fn status_lists_every_label() {
        let err = data(json!({ "status": "shipped" })).status().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[test]
    fn empty_body_ids_are_ignored() {
        assert!(data(json!({ "id": "" })).body_id().is_none());
        assert!(data(json!({ "id": null })).body_id().is_none());
        assert_eq!(data(json!({ "id": 7 })).body_id(), Some(&json!(7)));
    }

    #[test]
    fn missing_data_is_an_empty_object() {
        let envelope: Envelope = serde_json::from_value(json!({ "data": null })).unwrap();
        assert_eq!(envelope.into_data(), RequestData::default());
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(envelope.into_data(), RequestData::default());
        for data in [json!("x"), json!([1]), json!(7)] {
            let envelope: Envelope = serde_json::from_value(json!({ "data": data })).unwrap();
            assert_eq!(envelope.into_data(), RequestData::default());
        }
    }
}

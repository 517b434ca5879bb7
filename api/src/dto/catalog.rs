use serde::Deserialize;

/// Query string of `GET /products`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub brand_id: Option<String>,
}

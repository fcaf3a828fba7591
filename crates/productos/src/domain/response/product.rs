use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nombre")]
    #[schema(example = "Leche")]
    pub name: String,
    #[serde(rename = "codigo_barra")]
    #[schema(example = "7501234")]
    pub barcode: String,
    #[serde(rename = "precio")]
    #[schema(example = 1.5)]
    pub price: f64,
    #[schema(example = 10)]
    pub stock: Option<i32>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            barcode: value.barcode,
            price: value.price,
            stock: value.stock,
        }
    }
}

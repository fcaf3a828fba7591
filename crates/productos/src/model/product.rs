use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Row of the externally managed `productos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "codigo_barra")]
    pub barcode: String,
    #[sqlx(rename = "precio")]
    pub price: f64,
    pub stock: Option<i32>,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.barcode)
    }
}

use crate::model::product::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    errors::{FieldErrors, ServiceError, field_errors},
    utils::deserialize_some,
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_AN_OBJECT: &str = "Invalid data. Expected a dictionary.";
const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Query string accepted by the collection endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Case-insensitive substring of `nombre`.
    #[param(example = "lech")]
    pub name: Option<String>,

    /// Exact `codigo_barra`.
    #[param(example = "7501234")]
    pub barcode: Option<String>,
}

/// Filters applied when listing products. Both filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub barcode: Option<String>,
}

impl From<&FindAllProducts> for ProductFilter {
    fn from(query: &FindAllProducts) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        Self {
            name: non_empty(&query.name),
            barcode: non_empty(&query.barcode),
        }
    }
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.barcode.is_none()
    }

    /// `ILIKE` pattern for the name filter with `%`, `_` and `\` escaped so
    /// they match literally.
    pub fn name_pattern(&self) -> Option<String> {
        self.name.as_deref().map(|name| {
            let mut pattern = String::with_capacity(name.len() + 2);
            pattern.push('%');
            for c in name.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// Whether a body replaces the whole record or merges into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Partial,
}

/// Body of `POST /productos/`, `PUT /productos/{id}/` and
/// `PATCH /productos/{id}/`.
///
/// Every field separates an omitted key (`None`) from an explicit `null`
/// (`Some(None)`). Only `stock` may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, max_length = 100, example = "Leche")]
    pub nombre: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, max_length = 50, example = "7501234")]
    pub codigo_barra: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>, example = 1.5)]
    pub precio: Option<Option<f64>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>, example = 10)]
    pub stock: Option<Option<i32>>,
}

/// Trimmed text columns, checked against their column widths.
#[derive(Debug, Validate)]
struct TextColumns {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    nombre: Option<String>,

    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    codigo_barra: Option<String>,
}

/// Validated input for inserting a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub barcode: String,
    pub price: f64,
    pub stock: Option<i32>,
}

/// Validated set of column changes; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<Option<i32>>,
}

impl ProductChanges {
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(barcode) = &self.barcode {
            product.barcode = barcode.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

impl ProductRequest {
    /// Decodes a JSON body. A value of the wrong type is reported under the
    /// key it was sent for.
    pub fn from_json(body: Value) -> Result<Self, ServiceError> {
        if !body.is_object() {
            return Err(ServiceError::field(NON_FIELD_ERRORS, NOT_AN_OBJECT));
        }

        serde_path_to_error::deserialize(body).map_err(|err| {
            let field = err.path().to_string();
            let message = invalid_value(&field);
            ServiceError::field(&field, message)
        })
    }

    /// Checks presence, nulls, blank text and column widths, reporting every
    /// failing field at once. Text fields are trimmed.
    pub fn into_changes(self, mode: UpdateMode) -> Result<ProductChanges, ServiceError> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "nombre", self.nombre, mode);
        let barcode = required_text(&mut errors, "codigo_barra", self.codigo_barra, mode);
        let price = required(&mut errors, "precio", self.precio, mode);

        let columns = TextColumns {
            nombre: name.clone(),
            codigo_barra: barcode.clone(),
        };
        if let Err(e) = columns.validate() {
            for (field, messages) in field_errors(&e) {
                errors.entry(field).or_default().extend(messages);
            }
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        Ok(ProductChanges {
            name,
            barcode,
            price,
            stock: self.stock,
        })
    }
}

impl TryFrom<ProductRequest> for NewProduct {
    type Error = ServiceError;

    fn try_from(req: ProductRequest) -> Result<Self, Self::Error> {
        let changes = req.into_changes(UpdateMode::Full)?;

        let (Some(name), Some(barcode), Some(price)) =
            (changes.name, changes.barcode, changes.price)
        else {
            return Err(ServiceError::Internal(
                "required product fields missing after validation".into(),
            ));
        };

        Ok(Self {
            name,
            barcode,
            price,
            stock: changes.stock.flatten(),
        })
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn required<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<T>>,
    mode: UpdateMode,
) -> Option<T> {
    match value {
        Some(Some(value)) => Some(value),
        Some(None) => {
            push_error(errors, field, NOT_NULL);
            None
        }
        None => {
            if mode == UpdateMode::Full {
                push_error(errors, field, REQUIRED);
            }
            None
        }
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<String>>,
    mode: UpdateMode,
) -> Option<String> {
    let value = required(errors, field, value, mode)?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        push_error(errors, field, NOT_BLANK);
        return None;
    }
    Some(trimmed.to_string())
}

fn invalid_value(field: &str) -> &'static str {
    match field {
        "precio" => "A valid number is required.",
        "stock" => "A valid integer is required.",
        _ => "Not a valid string.",
    }
}

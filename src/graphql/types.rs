use crate::model::{Car as ModelCar, CarInput as ModelCarInput};
use async_graphql::{ID, InputObject, MaybeUndefined, Object};

pub struct Car(ModelCar);

/// A car has a make, model, and year
#[Object]
impl Car {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn make(&self) -> async_graphql::Result<String> {
        required(&self.0.make, "make")
    }

    async fn model(&self) -> async_graphql::Result<String> {
        required(&self.0.model, "model")
    }

    async fn year(&self) -> Option<i32> {
        self.0.year
    }
}

/// Non-null field that may be unset when `addCar` got a partial input.
fn required(value: &Option<String>, field: &str) -> async_graphql::Result<String> {
    value.clone().ok_or_else(|| {
        async_graphql::Error::new(format!(
            "Cannot return null for non-nullable field Car.{}.",
            field
        ))
    })
}

impl From<ModelCar> for Car {
    fn from(c: ModelCar) -> Self {
        Self(c)
    }
}

impl From<&ModelCar> for Car {
    fn from(c: &ModelCar) -> Self {
        Self(c.clone())
    }
}

/// Input type for adding/updating car
#[derive(InputObject)]
pub struct CarInput {
    pub make: MaybeUndefined<String>,
    pub model: MaybeUndefined<String>,
    pub year: MaybeUndefined<i32>,
}

impl From<CarInput> for ModelCarInput {
    fn from(i: CarInput) -> Self {
        Self {
            make: patch(i.make),
            model: patch(i.model),
            year: patch(i.year),
        }
    }
}

// Keeps an explicit null apart from an omitted field
fn patch<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

/// A car record held by the registry.
///
/// `make` and `model` are optional here because `add` copies its input
/// without checking presence, and `update` may null them out. The GraphQL
/// layer reports a field error when a car missing either of them is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

impl Car {
    pub fn new(id: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            make: Some(make.into()),
            model: Some(model.into()),
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Builds a car straight from an input. Absent and null fields stay unset.
    pub fn from_input(id: String, input: CarInput) -> Self {
        Self {
            id,
            make: input.make.flatten(),
            model: input.model.flatten(),
            year: input.year.flatten(),
        }
    }

    /// Overwrites the fields present in `input`, leaving the rest alone.
    ///
    /// A field present as null clears the stored value.
    pub fn apply(&mut self, input: CarInput) {
        if let Some(make) = input.make {
            self.make = make;
        }
        if let Some(model) = input.model {
            self.model = model;
        }
        if let Some(year) = input.year {
            self.year = year;
        }
    }

    /// Case-insensitive substring match on make or model.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(needle))
        };
        hit(&self.make) || hit(&self.model)
    }
}

/// Partial car fields used by `add` and `update`.
///
/// Each field is `None` when absent, `Some(None)` when given as null and
/// `Some(Some(v))` when given a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarInput {
    pub make: Option<Option<String>>,
    pub model: Option<Option<String>>,
    pub year: Option<Option<i32>>,
}

impl CarInput {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            make: Some(Some(make.into())),
            model: Some(Some(model.into())),
            year: year.map(Some),
        }
    }
}

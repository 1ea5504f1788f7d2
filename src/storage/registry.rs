use crate::config::{IdMode, RegistrySettings};
use crate::model::{Car, CarInput};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Registry shared between request handlers.
///
/// Mutations hold the write lock for the whole operation, so concurrent
/// requests cannot lose updates or race on id assignment.
pub type SharedRegistry = Arc<RwLock<CarRegistry>>;

/// Ordered, in-memory list of cars.
#[derive(Debug, Clone)]
pub struct CarRegistry {
    cars: Vec<Car>,
    id_mode: IdMode,
    next_id: u64,
}

impl CarRegistry {
    /// Creates an empty registry.
    pub fn new(id_mode: IdMode) -> Self {
        Self::with_cars(Vec::new(), id_mode)
    }

    /// Creates a registry holding the four demo cars.
    pub fn seeded(id_mode: IdMode) -> Self {
        Self::with_cars(seed_cars(), id_mode)
    }

    pub fn from_settings(settings: &RegistrySettings) -> Self {
        if settings.seed {
            Self::seeded(settings.id_mode)
        } else {
            Self::new(settings.id_mode)
        }
    }

    /// Creates a registry from existing cars, keeping their order.
    ///
    /// The sequential counter starts one past the largest numeric id and
    /// stops at `u64::MAX`.
    pub fn with_cars(cars: Vec<Car>, id_mode: IdMode) -> Self {
        let next_id = cars
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            cars,
            id_mode,
            next_id,
        }
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn list_all(&self) -> &[Car] {
        &self.cars
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    /// Cars whose make or model contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Car> {
        let needle = query.to_lowercase();
        self.cars.iter().filter(|c| c.matches(&needle)).collect()
    }

    /// Appends a new car built from `input` and returns it.
    pub fn add(&mut self, input: CarInput) -> Car {
        let id = self.generate_id();
        let car = Car::from_input(id, input);
        debug!(id = %car.id, "added car");
        self.cars.push(car.clone());
        car
    }

    /// Patches the car with `id` in place. Returns `None` if there is none.
    pub fn update(&mut self, id: &str, input: CarInput) -> Option<Car> {
        let car = self.cars.iter_mut().find(|c| c.id == id)?;
        car.apply(input);
        debug!(id, "updated car");
        Some(car.clone())
    }

    /// Removes the car with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.cars.iter().position(|c| c.id == id) {
            Some(pos) => {
                self.cars.remove(pos);
                debug!(id, "deleted car");
                true
            }
            None => false,
        }
    }

    fn generate_id(&mut self) -> String {
        match self.id_mode {
            IdMode::Sequential => {
                let id = self.next_id;
                self.next_id = self.next_id.saturating_add(1);
                id.to_string()
            }
            IdMode::Length => (self.cars.len() + 1).to_string(),
        }
    }
}

fn seed_cars() -> Vec<Car> {
    vec![
        Car::new("1", "Toyota", "Corolla").with_year(1991),
        Car::new("2", "Volkswagen", "Jetta").with_year(2001),
        Car::new("3", "Honda", "CRV").with_year(2009),
        Car::new("4", "Toyota", "Highlander").with_year(2022),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cars: &[Car]) -> Vec<&str> {
        cars.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_contents() {
        let registry = CarRegistry::seeded(IdMode::Sequential);
        assert_eq!(registry.len(), 4);
        assert_eq!(ids(registry.list_all()), vec!["1", "2", "3", "4"]);

        let jetta = registry.get_by_id("2").unwrap();
        assert_eq!(jetta.make.as_deref(), Some("Volkswagen"));
        assert_eq!(jetta.model.as_deref(), Some("Jetta"));
        assert_eq!(jetta.year, Some(2001));
    }

    #[test]
    fn test_unknown_id_is_absent_and_not_deleted() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);
        let before = registry.list_all().to_vec();

        assert!(registry.get_by_id("42").is_none());
        assert!(!registry.delete("42"));
        assert!(registry.update("42", CarInput::default()).is_none());
        assert_eq!(registry.list_all(), before.as_slice());
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let registry = CarRegistry::seeded(IdMode::Sequential);
        let results: Vec<Car> = registry.search("").into_iter().cloned().collect();
        assert_eq!(results, registry.list_all());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = CarRegistry::seeded(IdMode::Sequential);
        let upper = registry.search("TOYOTA");
        let lower = registry.search("toyota");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_search_matches_model_in_order() {
        let registry = CarRegistry::seeded(IdMode::Sequential);

        let results = registry.search("toy");
        let found: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(found, vec!["1", "4"]);

        let results = registry.search("crv");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");

        assert!(registry.search("tesla").is_empty());
    }

    #[test]
    fn test_add_appends_with_input_fields() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);
        let car = registry.add(CarInput::new("Ford", "Focus", Some(2015)));

        assert_eq!(registry.len(), 5);
        assert_eq!(car.make.as_deref(), Some("Ford"));
        assert_eq!(car.model.as_deref(), Some("Focus"));
        assert_eq!(car.year, Some(2015));
        assert_eq!(registry.list_all().last(), Some(&car));
    }

    #[test]
    fn test_add_without_fields_is_not_validated() {
        let mut registry = CarRegistry::new(IdMode::Sequential);
        let car = registry.add(CarInput::default());

        assert_eq!(car.id, "1");
        assert!(car.make.is_none());
        assert!(car.model.is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_merges_present_fields_only() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);
        let others: Vec<Car> = registry
            .list_all()
            .iter()
            .filter(|c| c.id != "3")
            .cloned()
            .collect();

        let updated = registry
            .update(
                "3",
                CarInput {
                    model: Some(Some("CR-V".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, "3");
        assert_eq!(updated.make.as_deref(), Some("Honda"));
        assert_eq!(updated.model.as_deref(), Some("CR-V"));
        assert_eq!(updated.year, Some(2009));

        // Position is kept and the rest is untouched
        assert_eq!(registry.list_all()[2], updated);
        let after: Vec<Car> = registry
            .list_all()
            .iter()
            .filter(|c| c.id != "3")
            .cloned()
            .collect();
        assert_eq!(after, others);
    }

    #[test]
    fn test_delete_removes_and_shifts() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);

        assert!(registry.delete("2"));
        assert_eq!(registry.len(), 3);
        assert!(registry.get_by_id("2").is_none());
        assert_eq!(ids(registry.list_all()), vec!["1", "3", "4"]);

        assert!(!registry.delete("2"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_sequential_ids_stay_unique_after_delete() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);
        assert!(registry.delete("2"));

        let car = registry.add(CarInput::new("Ford", "Focus", Some(2015)));

        assert_eq!(car.id, "5");
        assert_eq!(ids(registry.list_all()), vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn test_sequential_ids_never_reused() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);
        let car = registry.add(CarInput::new("Ford", "Focus", None));
        assert_eq!(car.id, "5");
        assert!(registry.delete("5"));

        let car = registry.add(CarInput::new("Ford", "Fiesta", None));
        assert_eq!(car.id, "6");
    }

    #[test]
    fn test_length_ids_collide_after_delete() {
        let mut registry = CarRegistry::seeded(IdMode::Length);
        assert!(registry.delete("2"));

        let car = registry.add(CarInput::new("Ford", "Focus", Some(2015)));

        assert_eq!(car.id, "4");
        assert_eq!(ids(registry.list_all()), vec!["1", "3", "4", "4"]);
        // Lookup finds the first match, as the linear scan always did
        assert_eq!(
            registry.get_by_id("4").unwrap().model.as_deref(),
            Some("Highlander")
        );
    }

    #[test]
    fn test_length_ids_after_deleting_last_car() {
        let mut registry = CarRegistry::seeded(IdMode::Length);
        assert!(registry.delete("4"));

        let car = registry.add(CarInput::new("Ford", "Focus", None));

        assert_eq!(car.id, "4");
        assert_eq!(ids(registry.list_all()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_with_cars_ignores_non_numeric_ids() {
        let cars = vec![
            Car::new("abc", "Saab", "900"),
            Car::new("7", "Volvo", "240"),
        ];
        let mut registry = CarRegistry::with_cars(cars, IdMode::Sequential);
        let car = registry.add(CarInput::new("Fiat", "Panda", None));
        assert_eq!(car.id, "8");
    }

    #[test]
    fn test_with_cars_at_max_id_does_not_overflow() {
        let cars = vec![Car::new(u64::MAX.to_string(), "Saab", "900")];
        let mut registry = CarRegistry::with_cars(cars, IdMode::Sequential);

        registry.add(CarInput::new("Fiat", "Panda", None));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_update_with_null_clears_year() {
        let mut registry = CarRegistry::seeded(IdMode::Sequential);

        let updated = registry
            .update(
                "1",
                CarInput {
                    year: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.year, None);
        assert_eq!(updated.make.as_deref(), Some("Toyota"));
        assert_eq!(updated.model.as_deref(), Some("Corolla"));
        assert_eq!(registry.get_by_id("1").unwrap().year, None);
    }

    #[test]
    fn test_from_settings_unseeded() {
        let settings = RegistrySettings {
            seed: false,
            id_mode: IdMode::Length,
        };
        let mut registry = CarRegistry::from_settings(&settings);
        assert!(registry.is_empty());

        registry.add(CarInput::new("Ford", "Focus", None));
        registry.add(CarInput::new("Ford", "Fiesta", None));
        assert!(registry.delete("1"));
        // len + 1 gives "2" again
        let car = registry.add(CarInput::new("Ford", "Ka", None));
        assert_eq!(car.id, "2");
    }

    #[tokio::test]
    async fn test_shared_registry_serializes_adds() {
        let shared = CarRegistry::seeded(IdMode::Sequential).into_shared();

        let mut handles = Vec::new();
        for i in 0..16 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared
                    .write()
                    .await
                    .add(CarInput::new("Make", format!("Model {}", i), None))
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let registry = shared.read().await;
        assert_eq!(registry.len(), 20);
        let mut seen: Vec<&str> = ids(registry.list_all());
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 20);
    }
}

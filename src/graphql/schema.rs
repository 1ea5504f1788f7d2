use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::storage::SharedRegistry;

use super::types::*;

pub type CarsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(registry: SharedRegistry) -> CarsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(registry)
        .finish()
}

fn get_registry<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedRegistry> {
    ctx.data::<SharedRegistry>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Get all cars
    async fn cars(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Car>> {
        let registry = get_registry(ctx)?.read().await;
        Ok(registry.list_all().iter().map(Car::from).collect())
    }

    /// Get a specific car by ID
    async fn car(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Car>> {
        let registry = get_registry(ctx)?.read().await;
        Ok(registry.get_by_id(&id).map(Car::from))
    }

    /// Search cars by make or model
    async fn search_cars(
        &self,
        ctx: &Context<'_>,
        query: String,
    ) -> async_graphql::Result<Vec<Car>> {
        let registry = get_registry(ctx)?.read().await;
        Ok(registry.search(&query).into_iter().map(Car::from).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a new car
    async fn add_car(&self, ctx: &Context<'_>, input: CarInput) -> async_graphql::Result<Car> {
        let mut registry = get_registry(ctx)?.write().await;
        Ok(registry.add(input.into()).into())
    }

    /// Update an existing car
    async fn update_car(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: CarInput,
    ) -> async_graphql::Result<Option<Car>> {
        let mut registry = get_registry(ctx)?.write().await;
        Ok(registry.update(&id, input.into()).map(Car::from))
    }

    /// Delete a car
    async fn delete_car(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<bool>> {
        let mut registry = get_registry(ctx)?.write().await;
        Ok(Some(registry.delete(&id)))
    }
}

use async_graphql::{EmptySubscription, MergedObject, Schema};

use domain_customers::{CustomerMutation, CustomerQuery, CustomerService};
use domain_orders::{OrderMutation, OrderQuery, OrderService};
use domain_products::{ProductMutation, ProductQuery, ProductService};

/// Root query, merged from the per-domain query objects
#[derive(MergedObject, Default)]
pub struct QueryRoot(CustomerQuery, ProductQuery, OrderQuery);

/// Root mutation, merged from the per-domain mutation objects
#[derive(MergedObject, Default)]
pub struct MutationRoot(CustomerMutation, ProductMutation, OrderMutation);

pub type CrmSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Assemble the executable schema with the domain services as context data.
pub fn build_schema(
    customers: CustomerService,
    products: ProductService,
    orders: OrderService,
) -> CrmSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(customers)
    .data(products)
    .data(orders)
    .finish()
}

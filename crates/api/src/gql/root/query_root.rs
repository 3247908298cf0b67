use async_graphql::MergedObject;

use crate::gql::domains::activity_logs::ActivityLogQuery;
use crate::gql::domains::addresses::AddressQuery;
use crate::gql::domains::congregations::CongregationQuery;
use crate::gql::domains::publishers::PublisherQuery;
use crate::gql::domains::territories::TerritoryQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    PublisherQuery,
    CongregationQuery,
    TerritoryQuery,
    AddressQuery,
    ActivityLogQuery,
);

pub mod entity;
pub mod mapper;
pub mod migrations;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::contract::model::QuantityEntry;

/// JSON column holding a row's owned entry sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EntryList(pub Vec<QuantityEntry>);

/// JSON column holding a recipe's ordered steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StepList(pub Vec<String>);

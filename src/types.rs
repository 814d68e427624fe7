/// Wire data model for the Sui execution result
///
/// These structs mirror the JSON returned by `sui_executeTransactionBlock`.
/// Every field the report does not strictly need is optional, and the
/// `Owner` enum carries a catch-all variant so deserialization is total:
/// an unrecognized shape becomes data, never an error.
///
/// Numeric wire values (gas costs, balance amounts) are string-encoded by
/// the node and are kept as strings here; the report prints them verbatim
/// and only the balance sign check ever parses one (see `amount.rs`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level response for one executed transaction block
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    pub digest: String,

    /// Execution effects: status, gas, created object refs
    #[serde(default)]
    pub effects: Option<TransactionEffects>,

    /// Heterogeneous object-change records; only consulted to look up the
    /// declared type of a created object
    #[serde(default)]
    pub object_changes: Option<Vec<ObjectChange>>,

    /// Net balance deltas per coin type and owner
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChange>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    #[serde(default)]
    pub status: Option<ExecutionStatus>,

    #[serde(default)]
    pub gas_used: Option<GasCostSummary>,

    #[serde(default)]
    pub created: Option<Vec<OwnedObjectRef>>,
}

/// Execution status: `status` is "success" or "failure", with the raw
/// failure reason in `error` when the node supplied one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutionStatus {
    pub status: String,

    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Gas accounting in MIST. The three components are reported separately
/// and never combined into a net figure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    pub computation_cost: String,
    pub storage_cost: String,
    pub storage_rebate: String,
}

/// A created object: its reference plus who owns it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnedObjectRef {
    pub reference: ObjectRef,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: String,
}

/// One entry from `objectChanges`. The wire carries several record shapes
/// (published, created, mutated, ...) that do not all have an object id or
/// type, so both are optional here.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectChange {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub object_id: Option<String>,

    #[serde(default)]
    pub object_type: Option<String>,
}

/// One net balance delta. `amount` is a signed, string-encoded integer
/// that can exceed 64 bits; `coin_type` is `package::module::TYPENAME`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    pub owner: Owner,
    pub coin_type: String,
    pub amount: String,
}

/// Polymorphic owner descriptor.
///
/// The node returns one of `{"AddressOwner": addr}`, `{"ObjectOwner": id}`,
/// `{"Shared": {...}}`, or the bare string `"Immutable"`. Untagged
/// deserialization tries the variants in order and `Other` accepts any
/// remaining JSON, so an owner field can never fail to parse.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Owner {
    Address {
        #[serde(rename = "AddressOwner")]
        address: String,
    },
    Object {
        #[serde(rename = "ObjectOwner")]
        object_id: String,
    },
    Shared {
        #[serde(rename = "Shared")]
        shared: SharedOwner,
    },
    Other(Value),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SharedOwner {
    pub initial_shared_version: Value,
}

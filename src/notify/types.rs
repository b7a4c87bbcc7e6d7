use serde::{Deserialize, Serialize};

pub type ActionId = i32;

pub const NO_ACTION_ID: ActionId = i32::MIN;
pub const NO_ACTION_NAME: &str = "none";
pub const NULL_ACTION: ActionId = 0;

pub const CONTEXT_ACTION_BASE: ActionId = 100;
pub const SECURITY_ACTION_BASE: ActionId = 400;
pub const MANAGEMENT_ACTION_BASE: ActionId = 500;
pub const ADMIN_ACTION_BASE: ActionId = 600;
pub const CONNECTION_ACTION_BASE: ActionId = 700;
pub const MESSAGE_ACTION_BASE: ActionId = 800;
pub const MESSAGE_END_ACTION_BASE: ActionId = 850;
pub const SPACE_ACTION_BASE: ActionId = 900;
pub const REGISTRY_ACTION_BASE: ActionId = 1000;
pub const EXCEPTION_ACTION_BASE: ActionId = 1100;
pub const TRANSACTION_ACTION_BASE: ActionId = 1200;
pub const ROUTING_ACTION_BASE: ActionId = 1300;
pub const COMPONENT_ACTION_BASE: ActionId = 1400;
pub const FLOW_CONSTRUCT_ACTION_BASE: ActionId = 1500;
pub const PROCESSOR_ACTION_BASE: ActionId = 1600;
pub const CLUSTER_NODE_ACTION_BASE: ActionId = 1700;
pub const PIPELINE_MESSAGE_ACTION_BASE: ActionId = 1800;
pub const ASYNC_MESSAGE_ACTION_BASE: ActionId = 1900;
pub const EXCEPTION_STRATEGY_ACTION_BASE: ActionId = 2000;
pub const POLICY_MESSAGE_ACTION_BASE: ActionId = 2100;
pub const PROFILING_ACTION_BASE: ActionId = 2200;
pub const POLLING_SOURCE_ACTION_BASE: ActionId = 2300;
pub const CUSTOM_ACTION_BASE: ActionId = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Trace,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Strict,
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub id: ActionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActionCatalog {
    pub version: u64,
    #[serde(default)]
    pub entries: Vec<ActionEntry>,
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::intercept::ports::InterceptorFactory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComponentLocation {
    pub path: String,
    pub component_id: String,
}

#[derive(Clone)]
pub struct FactoryRegistration {
    pub identity: String,
    pub factory: Arc<dyn InterceptorFactory>,
}

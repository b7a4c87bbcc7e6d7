pub mod ordering;
pub mod ports;
pub mod types;

pub use ordering::{InterceptorChain, prefix_rank, sort_by_priority};
pub use ports::InterceptorFactory;
pub use types::{ComponentLocation, FactoryRegistration};

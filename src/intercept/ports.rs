use crate::intercept::types::ComponentLocation;

pub trait InterceptorFactory: Send + Sync {
    fn intercept(&self, _location: &ComponentLocation) -> bool {
        true
    }
}

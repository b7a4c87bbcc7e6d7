use std::sync::Arc;

use crate::intercept::{
    ports::InterceptorFactory,
    types::{ComponentLocation, FactoryRegistration},
};

pub fn prefix_rank(identity: &str, priority: &[String]) -> Option<usize> {
    priority
        .iter()
        .position(|prefix| identity.starts_with(prefix.as_str()))
}

pub fn sort_by_priority(
    registrations: Vec<FactoryRegistration>,
    priority: &[String],
) -> Vec<FactoryRegistration> {
    let mut ranked: Vec<(usize, usize, FactoryRegistration)> = registrations
        .into_iter()
        .enumerate()
        .map(|(insertion_index, registration)| {
            let rank = prefix_rank(&registration.identity, priority).unwrap_or(usize::MAX);
            (rank, insertion_index, registration)
        })
        .collect();

    ranked.sort_by(|lhs, rhs| (lhs.0, lhs.1).cmp(&(rhs.0, rhs.1)));
    ranked
        .into_iter()
        .map(|(_, _, registration)| registration)
        .collect()
}

#[derive(Default)]
pub struct InterceptorChain {
    registrations: Vec<FactoryRegistration>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, identity: impl Into<String>, factory: Arc<dyn InterceptorFactory>) {
        self.registrations.push(FactoryRegistration {
            identity: identity.into(),
            factory,
        });
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn ordered(&self, priority: &[String]) -> Vec<FactoryRegistration> {
        sort_by_priority(self.registrations.clone(), priority)
    }

    pub fn applicable(
        &self,
        location: &ComponentLocation,
        priority: &[String],
    ) -> Vec<FactoryRegistration> {
        self.ordered(priority)
            .into_iter()
            .filter(|registration| registration.factory.intercept(location))
            .collect()
    }
}

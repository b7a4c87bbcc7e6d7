use std::{collections::BTreeMap, sync::RwLock};

use crate::notify::{
    error::{
        NotifyError, conflicting_redefinition, duplicate_action_name, unknown_action_id,
        unknown_action_name,
    },
    types::{ActionCatalog, ActionEntry, ActionId, DuplicatePolicy, NO_ACTION_ID, NO_ACTION_NAME},
};

#[derive(Default)]
struct RegistryState {
    version: u64,
    entries: Vec<ActionEntry>,
    by_id: BTreeMap<ActionId, usize>,
    by_name: BTreeMap<String, usize>,
}

pub struct ActionRegistry {
    policy: DuplicatePolicy,
    state: RwLock<RegistryState>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new(DuplicatePolicy::Strict)
    }
}

impl ActionRegistry {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            state: RwLock::new(RegistryState::default()),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn version(&self) -> u64 {
        self.state.read().expect("lock poisoned").version
    }

    pub fn len(&self) -> usize {
        self.state.read().expect("lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn register(&self, name: &str, id: ActionId) -> Result<(), NotifyError> {
        let normalized = name.to_lowercase();
        let mut guard = self.state.write().expect("lock poisoned");

        let mut already_registered = false;
        if let Some(&index) = guard.by_name.get(&normalized) {
            already_registered = true;
            match self.policy {
                DuplicatePolicy::Strict => {
                    return Err(duplicate_action_name(format!(
                        "action '{normalized}' already registered"
                    )));
                }
                DuplicatePolicy::Permissive => {
                    let existing_id = guard.entries[index].id;
                    if existing_id != id {
                        return Err(conflicting_redefinition(format!(
                            "action '{normalized}' already registered with id {existing_id}, \
                             attempted to redefine with id {id}"
                        )));
                    }
                }
            }
        }
        if let Some(&index) = guard.by_id.get(&id) {
            already_registered = true;
            match self.policy {
                DuplicatePolicy::Strict => {
                    return Err(duplicate_action_name(format!(
                        "action id {id} already registered"
                    )));
                }
                DuplicatePolicy::Permissive => {
                    let existing_name = guard.entries[index].name.as_str();
                    if existing_name != normalized {
                        return Err(conflicting_redefinition(format!(
                            "action id {id} already registered with name '{existing_name}', \
                             attempted to redefine with name '{normalized}'"
                        )));
                    }
                }
            }
        }
        if already_registered {
            return Ok(());
        }

        guard.entries.push(ActionEntry {
            id,
            name: normalized.clone(),
        });
        let index = guard.entries.len() - 1;
        guard.by_id.insert(id, index);
        guard.by_name.insert(normalized.clone(), index);
        guard.version = guard.version.saturating_add(1);
        tracing::debug!(target: "notify.registry", action = %normalized, id, "action_registered");
        Ok(())
    }

    pub fn action_name(&self, id: ActionId) -> Result<String, NotifyError> {
        if id == NO_ACTION_ID {
            return Ok(NO_ACTION_NAME.to_string());
        }

        let guard = self.state.read().expect("lock poisoned");
        guard
            .by_id
            .get(&id)
            .map(|&index| guard.entries[index].name.clone())
            .ok_or_else(|| unknown_action_id(format!("no action with id {id}")))
    }

    pub fn action_id(&self, name: &str) -> Result<ActionId, NotifyError> {
        let normalized = name.to_lowercase();
        let guard = self.state.read().expect("lock poisoned");
        guard
            .by_name
            .get(&normalized)
            .map(|&index| guard.entries[index].id)
            .ok_or_else(|| unknown_action_name(format!("no action called '{normalized}'")))
    }

    pub fn catalog(&self) -> ActionCatalog {
        let guard = self.state.read().expect("lock poisoned");
        let mut entries = guard.entries.clone();
        entries.sort_by(|lhs, rhs| lhs.id.cmp(&rhs.id));

        ActionCatalog {
            version: guard.version,
            entries,
        }
    }
}

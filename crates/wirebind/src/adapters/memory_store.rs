//! # In-Memory Store
//!
//! Reference [`Store`] implementation: a flat registry of mutation and
//! action handlers, with optional namespaced modules whose member names are
//! qualified as `"module/member"`. Action chains support decorator
//! composition so the binder can layer emission and lifecycle behavior on
//! top of the registered handlers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::ports::{ActionDecorator, ActionFn, MutationFn, Payload, Store};

/// Declarative module definition: a set of mutations and actions, either
/// namespaced (names qualified with `"name/"`) or merged into the root.
#[derive(Default)]
pub struct ModuleDef {
    namespaced: bool,
    mutations: Vec<(String, MutationFn)>,
    actions: Vec<(String, ActionFn)>,
}

impl ModuleDef {
    #[must_use]
    pub fn new(namespaced: bool) -> Self {
        Self {
            namespaced,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mutation(
        mut self,
        name: &str,
        handler: impl Fn(Payload) + Send + Sync + 'static,
    ) -> Self {
        self.mutations.push((name.to_string(), Arc::new(handler)));
        self
    }

    #[must_use]
    pub fn action(mut self, name: &str, handler: impl Fn(Payload) + Send + Sync + 'static) -> Self {
        self.actions.push((name.to_string(), Arc::new(handler)));
        self
    }
}

/// A named action's invocable state: the registered handlers plus the chain
/// the decorators have built around them.
struct ActionEntry {
    handlers: Arc<RwLock<Vec<ActionFn>>>,
    chain: ActionFn,
}

impl ActionEntry {
    fn new() -> Self {
        let handlers = Arc::new(RwLock::new(Vec::new()));
        let chain = base_chain(Arc::clone(&handlers));
        Self { handlers, chain }
    }
}

/// The undecorated chain: invoke every registered handler in order. Reads
/// the live handler list so registrations after decoration still run.
fn base_chain(handlers: Arc<RwLock<Vec<ActionFn>>>) -> ActionFn {
    Arc::new(move |payload: Payload| {
        let snapshot = {
            let Ok(list) = handlers.read() else { return };
            list.clone()
        };
        for handler in &snapshot {
            handler(payload.clone());
        }
    })
}

/// In-memory keyed mutation/action container.
pub struct InMemoryStore {
    mutations: RwLock<HashMap<String, Vec<MutationFn>>>,
    actions: RwLock<HashMap<String, ActionEntry>>,
    namespaces: RwLock<Vec<String>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mutations: RwLock::new(HashMap::new()),
            actions: RwLock::new(HashMap::new()),
            namespaces: RwLock::new(Vec::new()),
        }
    }

    /// Register a module. A namespaced module qualifies its member names
    /// with `"name/"` and contributes `name` to the namespace list; a
    /// non-namespaced module merges its members into the root, so a member
    /// name shared with another module accumulates handlers.
    pub fn module(&self, name: &str, def: ModuleDef) {
        let prefix = if def.namespaced {
            if let Ok(mut namespaces) = self.namespaces.write() {
                namespaces.push(format!("{name}/"));
            }
            format!("{name}/")
        } else {
            String::new()
        };

        for (member, handler) in def.mutations {
            self.register_mutation(&format!("{prefix}{member}"), handler);
        }
        for (member, handler) in def.actions {
            self.register_action(&format!("{prefix}{member}"), handler);
        }
    }

    /// Register a root-level mutation handler under a fully-qualified name.
    pub fn register_mutation(&self, name: &str, handler: MutationFn) {
        let Ok(mut mutations) = self.mutations.write() else {
            return;
        };
        mutations.entry(name.to_string()).or_default().push(handler);
    }

    /// Register a root-level action handler under a fully-qualified name.
    /// Registering under an existing name appends to its handler list; the
    /// decorated chain picks the new handler up.
    pub fn register_action(&self, name: &str, handler: ActionFn) {
        let Ok(mut actions) = self.actions.write() else {
            return;
        };
        let entry = actions
            .entry(name.to_string())
            .or_insert_with(ActionEntry::new);
        if let Ok(mut handlers) = entry.handlers.write() {
            handlers.push(handler);
        };
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for InMemoryStore {
    fn mutation_names(&self) -> Vec<String> {
        self.mutations
            .read()
            .map(|mutations| mutations.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn action_names(&self) -> Vec<String> {
        self.actions
            .read()
            .map(|actions| actions.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn module_namespaces(&self) -> Vec<String> {
        self.namespaces
            .read()
            .map(|namespaces| namespaces.clone())
            .unwrap_or_default()
    }

    fn commit(&self, mutation: &str, payload: Payload) {
        let snapshot = {
            let Ok(mutations) = self.mutations.read() else {
                return;
            };
            mutations.get(mutation).cloned()
        };
        let Some(handlers) = snapshot else {
            // Unknown name: convention mismatch, not an error.
            debug!(mutation, "commit with no registered handler");
            return;
        };
        for handler in &handlers {
            handler(payload.clone());
        }
    }

    fn dispatch(&self, action: &str, payload: Payload) {
        let chain = {
            let Ok(actions) = self.actions.read() else {
                return;
            };
            actions.get(action).map(|entry| Arc::clone(&entry.chain))
        };
        let Some(chain) = chain else {
            debug!(action, "dispatch with no registered handler");
            return;
        };
        chain(payload);
    }

    fn decorate_action(&self, action: &str, decorator: ActionDecorator) {
        let Ok(mut actions) = self.actions.write() else {
            return;
        };
        let Some(entry) = actions.get_mut(action) else {
            debug!(action, "decorating unknown action, ignored");
            return;
        };
        let inner = Arc::clone(&entry.chain);
        entry.chain = decorator(inner);
    }
}

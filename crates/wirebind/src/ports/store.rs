use std::sync::Arc;

use super::channel::Payload;

/// Handler registered under a mutation name.
pub type MutationFn = Arc<dyn Fn(Payload) + Send + Sync>;

/// Invocable action chain: the registered handlers plus any decorators
/// layered on top.
pub type ActionFn = Arc<dyn Fn(Payload) + Send + Sync>;

/// A middleware step wrapping a named action: receives the current chain and
/// returns the new one. The wrapper is expected to call the inner chain so
/// the original handlers still execute.
pub type ActionDecorator = Box<dyn FnOnce(ActionFn) -> ActionFn + Send>;

/// A keyed mutation/action dispatch container.
///
/// The three `*_names` views are the store's introspection surface; the
/// binder reads them once per binding pass (snapshot semantics — members
/// registered afterwards are not picked up by existing bindings).
pub trait Store: Send + Sync {
    /// Currently registered mutation names, fully qualified.
    fn mutation_names(&self) -> Vec<String>;

    /// Currently registered action names, fully qualified.
    fn action_names(&self) -> Vec<String>;

    /// Namespaces of the store's namespaced sub-modules.
    fn module_namespaces(&self) -> Vec<String>;

    /// Invoke every handler registered under a mutation name.
    fn commit(&self, mutation: &str, payload: Payload);

    /// Invoke the (possibly decorated) chain registered under an action name.
    fn dispatch(&self, action: &str, payload: Payload);

    /// Wrap a named action's chain in place. Unknown names are ignored.
    fn decorate_action(&self, action: &str, decorator: ActionDecorator);
}

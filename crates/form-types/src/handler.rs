use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{OptionValue, Platform};

/// A shared callback.
///
/// Two handlers are equal only when they are the same allocation, which is
/// what component props need to detect a changed callback.
pub struct Handler<T>(Rc<dyn Fn(T)>);

impl<T> Handler<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Handler(Rc::new(f))
    }

    pub fn call(&self, arg: T) {
        (self.0)(arg)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Change event delivered to web-style `on_change` handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The newly chosen option value.
    pub value: OptionValue,
    /// Platform that produced the event. Native events are synthesized.
    pub platform: Platform,
}

impl ChangeEvent {
    pub fn new(value: impl Into<OptionValue>, platform: Platform) -> Self {
        Self {
            value: value.into(),
            platform,
        }
    }
}

/// The single change-handler entry of a resolved prop set.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeHandler {
    /// Receives the change event.
    Web(Handler<ChangeEvent>),
    /// Receives the new value directly.
    Native(Handler<OptionValue>),
}

impl ChangeHandler {
    /// Prop key this handler is rendered under.
    pub fn key(&self) -> &'static str {
        match self {
            ChangeHandler::Web(_) => "onChange",
            ChangeHandler::Native(_) => "onValueChange",
        }
    }

    /// Deliver a change in whatever shape the bound handler takes.
    pub fn dispatch(&self, event: ChangeEvent) {
        match self {
            ChangeHandler::Web(handler) => handler.call(event),
            ChangeHandler::Native(handler) => handler.call(event.value),
        }
    }
}

/// Pick the change handler for the target platform.
///
/// A handler shaped for the other platform is adapted rather than dropped:
/// on web, `on_value_change` receives the event's value; on native,
/// `on_change` receives a synthesized [`ChangeEvent`]. With no handler at all
/// the control is display-only and nothing is bound.
pub fn resolve_change_handler(
    platform: Platform,
    on_change: Option<&Handler<ChangeEvent>>,
    on_value_change: Option<&Handler<OptionValue>>,
) -> Option<ChangeHandler> {
    match platform {
        Platform::Web => match (on_change, on_value_change) {
            (Some(on_change), _) => Some(ChangeHandler::Web(on_change.clone())),
            (None, Some(on_value_change)) => {
                let on_value_change = on_value_change.clone();
                Some(ChangeHandler::Web(Handler::new(move |event: ChangeEvent| {
                    on_value_change.call(event.value)
                })))
            }
            (None, None) => None,
        },
        Platform::Native => match (on_value_change, on_change) {
            (Some(on_value_change), _) => Some(ChangeHandler::Native(on_value_change.clone())),
            (None, Some(on_change)) => {
                let on_change = on_change.clone();
                Some(ChangeHandler::Native(Handler::new(move |value: OptionValue| {
                    on_change.call(ChangeEvent::new(value, Platform::Native))
                })))
            }
            (None, None) => None,
        },
    }
}

/// A handler whose identity survives re-renders.
///
/// The slot hands out the same [`Handler`] every time and forwards each call
/// to whichever handler was stored last, so props holding it compare equal
/// across renders while calls still reach the newest closure.
pub struct HandlerSlot<T> {
    latest: Rc<RefCell<Option<Handler<T>>>>,
    stable: Handler<T>,
}

impl<T: 'static> HandlerSlot<T> {
    pub fn new() -> Self {
        let latest: Rc<RefCell<Option<Handler<T>>>> = Rc::new(RefCell::new(None));
        let target = Rc::clone(&latest);
        let stable = Handler::new(move |arg: T| {
            // Released before the call so the handler may update the slot.
            let current = target.borrow().clone();
            if let Some(handler) = current {
                handler.call(arg);
            }
        });
        Self { latest, stable }
    }

    /// Store `handler` and return the stable forwarder, or `None` when
    /// nothing is bound.
    pub fn update(&self, handler: Option<Handler<T>>) -> Option<Handler<T>> {
        let bound = handler.is_some();
        *self.latest.borrow_mut() = handler;
        bound.then(|| self.stable.clone())
    }
}

impl<T: 'static> Default for HandlerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for HandlerSlot<T> {
    fn clone(&self) -> Self {
        Self {
            latest: Rc::clone(&self.latest),
            stable: self.stable.clone(),
        }
    }
}

/// One [`HandlerSlot`] per change-handler shape.
#[derive(Clone, Default)]
pub struct ChangeHandlerSlots {
    web: HandlerSlot<ChangeEvent>,
    native: HandlerSlot<OptionValue>,
}

impl ChangeHandlerSlots {
    /// Swap a freshly resolved handler for its stable forwarder.
    pub fn stabilize(&self, handler: Option<ChangeHandler>) -> Option<ChangeHandler> {
        match handler {
            Some(ChangeHandler::Web(handler)) => {
                self.native.update(None);
                self.web.update(Some(handler)).map(ChangeHandler::Web)
            }
            Some(ChangeHandler::Native(handler)) => {
                self.web.update(None);
                self.native.update(Some(handler)).map(ChangeHandler::Native)
            }
            None => {
                self.web.update(None);
                self.native.update(None);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn recorder<T: 'static>() -> (Handler<T>, Rc<RefCell<Vec<T>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (Handler::new(move |arg| sink.borrow_mut().push(arg)), seen)
    }

    #[test]
    fn web_binds_on_change_directly() {
        let (on_change, seen) = recorder::<ChangeEvent>();
        let handler = resolve_change_handler(Platform::Web, Some(&on_change), None).unwrap();

        assert_eq!(handler.key(), "onChange");
        assert_eq!(handler, ChangeHandler::Web(on_change.clone()));

        let event = ChangeEvent::new("b", Platform::Web);
        handler.dispatch(event.clone());
        assert_eq!(*seen.borrow(), vec![event]);
    }

    #[test]
    fn web_prefers_on_change_when_both_given() {
        let (on_change, _) = recorder::<ChangeEvent>();
        let (on_value_change, _) = recorder::<OptionValue>();
        let handler =
            resolve_change_handler(Platform::Web, Some(&on_change), Some(&on_value_change));
        assert_eq!(handler, Some(ChangeHandler::Web(on_change)));
    }

    #[test]
    fn web_adapts_value_handler() {
        let (on_value_change, seen) = recorder::<OptionValue>();
        let handler = resolve_change_handler(Platform::Web, None, Some(&on_value_change)).unwrap();

        assert_eq!(handler.key(), "onChange");
        handler.dispatch(ChangeEvent::new(3, Platform::Web));
        assert_eq!(*seen.borrow(), vec![OptionValue::Number(3.0)]);
    }

    #[test]
    fn native_binds_value_handler_directly() {
        let (on_value_change, seen) = recorder::<OptionValue>();
        let handler =
            resolve_change_handler(Platform::Native, None, Some(&on_value_change)).unwrap();

        assert_eq!(handler.key(), "onValueChange");
        assert_eq!(handler, ChangeHandler::Native(on_value_change.clone()));
        handler.dispatch(ChangeEvent::new("x", Platform::Native));
        assert_eq!(*seen.borrow(), vec![OptionValue::from("x")]);
    }

    #[test]
    fn native_adapts_web_style_on_change() {
        let (on_change, seen) = recorder::<ChangeEvent>();
        let handler = resolve_change_handler(Platform::Native, Some(&on_change), None).unwrap();

        assert_eq!(handler.key(), "onValueChange");
        match &handler {
            ChangeHandler::Native(native) => native.call(OptionValue::from("kiwi")),
            ChangeHandler::Web(_) => panic!("expected a native handler"),
        }
        assert_eq!(
            *seen.borrow(),
            vec![ChangeEvent::new("kiwi", Platform::Native)]
        );
    }

    #[test]
    fn no_handlers_binds_nothing() {
        assert_eq!(resolve_change_handler(Platform::Web, None, None), None);
        assert_eq!(resolve_change_handler(Platform::Native, None, None), None);
    }

    #[test]
    fn handler_equality_is_identity() {
        let a = Handler::new(|_: u8| {});
        let b = Handler::new(|_: u8| {});
        assert_eq!(a, a.clone());
        assert!(a != b);
    }

    #[test]
    fn slot_keeps_identity_and_forwards_to_latest() {
        let slot = HandlerSlot::<u8>::new();
        let (first, first_seen) = recorder::<u8>();
        let (second, second_seen) = recorder::<u8>();

        let a = slot.update(Some(first)).unwrap();
        let b = slot.update(Some(second)).unwrap();
        assert_eq!(a, b);

        a.call(7);
        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec![7]);

        assert_eq!(slot.update(None), None);
        b.call(8);
        assert_eq!(*second_seen.borrow(), vec![7]);
    }

    #[test]
    fn re_resolved_handlers_compare_equal_once_stabilized() {
        let slots = ChangeHandlerSlots::default();
        let (on_value_change, seen) = recorder::<OptionValue>();

        // Adapting builds a new closure on every resolution.
        let first = resolve_change_handler(Platform::Web, None, Some(&on_value_change));
        let second = resolve_change_handler(Platform::Web, None, Some(&on_value_change));
        assert!(first != second);

        let first = slots.stabilize(first);
        let second = slots.stabilize(second);
        assert_eq!(first, second);

        first.unwrap().dispatch(ChangeEvent::new("b", Platform::Web));
        assert_eq!(*seen.borrow(), vec![OptionValue::from("b")]);
        assert_eq!(slots.stabilize(None), None);
    }
}

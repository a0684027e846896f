use std::cell::RefCell;
use std::rc::Rc;

/// Receives the notice an image processor emits after each completed operation
pub trait ImageObserver {
    fn update(&self, completed_action: &str);
}

impl<F> ImageObserver for F
where
    F: Fn(&str),
{
    fn update(&self, completed_action: &str) {
        self(completed_action)
    }
}

/// Remembers the last notice it received
#[derive(Debug, Default)]
pub struct StatusObserver {
    status: RefCell<String>,
}

impl StatusObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// Hands out the last notice once, `None` if nothing arrived since
    pub fn take_status(&self) -> Option<String> {
        let status = self.status.take();
        (!status.is_empty()).then_some(status)
    }
}

impl ImageObserver for StatusObserver {
    fn update(&self, completed_action: &str) {
        let mut status = self.status.borrow_mut();
        status.clear();
        status.push_str(completed_action);
    }
}

/// Observers in registration order; every observer is contained at most once
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Rc<dyn ImageObserver>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Rc<dyn ImageObserver>) {
        if !self.contains(&observer) {
            self.observers.push(observer);
        }
    }

    pub fn remove(&mut self, observer: &Rc<dyn ImageObserver>) {
        self.observers
            .retain(|registered| !is_same_observer(registered, observer));
    }

    pub fn contains(&self, observer: &Rc<dyn ImageObserver>) -> bool {
        self.observers
            .iter()
            .any(|registered| is_same_observer(registered, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&self, completed_action: &str) {
        log::info!("{}", completed_action);
        for observer in &self.observers {
            observer.update(completed_action);
        }
    }
}

// compares the data pointers only, vtables of the same type may differ
fn is_same_observer(a: &Rc<dyn ImageObserver>, b: &Rc<dyn ImageObserver>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

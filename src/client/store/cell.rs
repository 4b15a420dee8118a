use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

/// Shared, interiorly mutable handle to a piece of state.
///
/// Reads through a cell never subscribe a component to changes; services use them from
/// async tasks, not from render bodies.
pub trait StateCell<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn put(&self, value: T) -> T {
        self.write_with(|current| std::mem::replace(current, value))
    }
}

/// Picks the concrete cell type used for every store of a service.
pub trait CellFamily: 'static {
    type Cell<T: 'static>: StateCell<T> + Clone;
}

/// Cells backed by `Rc<RefCell<_>>`, usable outside a Dioxus runtime.
#[derive(Clone, Copy, Debug)]
pub struct LocalCells;

impl CellFamily for LocalCells {
    type Cell<T: 'static> = Rc<RefCell<T>>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Cells backed by Dioxus signals, so writes re-render subscribed components.
#[derive(Clone, Copy, Debug)]
pub struct SignalCells;

impl CellFamily for SignalCells {
    type Cell<T: 'static> = Signal<T>;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.peek())
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut value = signal.write();
        f(&mut *value)
    }
}

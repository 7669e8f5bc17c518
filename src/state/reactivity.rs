// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista de subscribers compartida entre clones
#[derive(Clone, Default)]
pub struct Subscribers {
    callbacks: Rc<RefCell<Vec<Callback>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers.
    /// Se clona la lista antes de llamar para que un callback pueda suscribir otro.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Subscribers,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo con subscribers propios
    pub fn new(value: T) -> Self {
        Self::with_subscribers(value, Subscribers::new())
    }

    /// Crear estado que notifica a una lista de subscribers existente
    /// (varios campos de un mismo store comparten la lista)
    pub fn with_subscribers(value: T, subscribers: Subscribers) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers,
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.subscribers.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.subscribers.notify();
    }

    /// Actualizar sin notificar (la vista se refresca por otra vía)
    pub fn update_silent<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

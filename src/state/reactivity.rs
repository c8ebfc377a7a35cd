// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de subscribers (varios estados pueden notificar a la misma lista)
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

    /// Notificar a todos los subscribers
    /// Se copia la lista antes de llamar: un callback puede suscribir a otros sin panic de borrow
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Subscribers,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo con su propia lista de subscribers
    pub fn new(value: T) -> Self {
        Self::with_subscribers(value, Subscribers::new())
    }

    /// Crear estado reactivo que notifica a una lista existente
    pub fn with_subscribers(value: T, subscribers: Subscribers) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers,
        }
    }

    /// Obtener referencia compartida al valor interno (ve todas las mutaciones futuras)
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Préstamo de solo lectura
    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    /// El borrow se libera antes de notificar
    pub fn update<F, R>(&self, updater: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = updater(&mut *self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    fn notify(&self) {
        self.subscribers.notify();
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
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

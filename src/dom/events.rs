// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners en elementos del DOM: forget() filtraría el closure Rust (y los Rc
// del estado que captura) en cada render. Se guardan en LISTENERS y App::render
// los libera antes de vaciar el contenedor.
// Listeners globales (window): registrar UNA SOLA VEZ (ver router::history).
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MouseEvent};

thread_local! {
    static LISTENERS: RefCell<Vec<Box<dyn Any>>> = const { RefCell::new(Vec::new()) };
}

/// Mantener vivo un closure hasta el próximo release_listeners()
pub fn keep_alive<T: 'static>(closure: T) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(closure)));
}

/// Soltar los closures del render anterior; devuelve cuántos había
/// No llamar desde dentro de un listener: los renders van por schedule_render()
pub fn release_listeners() -> usize {
    let released = LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()));
    let count = released.len();
    drop(released);
    count
}

/// Registrar un listener de Event genérico y mantener vivo el closure
fn listen_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

/// Helper para "change" (inputs: se dispara al confirmar el valor)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen_event(element, "change", handler)
}

/// Helper para submit de formularios; previene el envío nativo
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen_event(element, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_release_drops_kept_values() {
        release_listeners();
        let captured = Rc::new(());

        keep_alive(captured.clone());
        keep_alive(captured.clone());
        assert_eq!(Rc::strong_count(&captured), 3);

        assert_eq!(release_listeners(), 2);
        assert_eq!(Rc::strong_count(&captured), 1);
        assert_eq!(release_listeners(), 0);
    }
}

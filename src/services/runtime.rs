// ============================================================================
// RUNTIME - Reloj, intervalos y tareas async del navegador
// ============================================================================
// El countdown y el carrito dependen de estos traits, no del navegador, así
// los tests pueden simular ticks y respuestas sin esperar tiempo real.
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;

/// Fuente de "ahora" en milisegundos epoch
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Programa un callback repetitivo y permite cancelarlo
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Puede llamarse desde dentro del propio tick
    fn cancel(&self, handle: Self::Handle);
}

/// Lanza una tarea async en el event loop
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// `Date.now()`
#[derive(Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// `setInterval` / `clearInterval` vía gloo_timers
#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }

    fn cancel(&self, handle: Interval) {
        // clearInterval inmediato; el closure se está ejecutando, se libera en la próxima tarea
        let closure = handle.cancel();
        wasm_bindgen_futures::spawn_local(async move {
            drop(closure);
        });
    }
}

/// `wasm_bindgen_futures::spawn_local`
#[derive(Clone, Copy, Default)]
pub struct LocalSpawner;

impl TaskSpawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

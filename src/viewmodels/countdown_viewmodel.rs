// ============================================================================
// COUNTDOWN VIEWMODEL - Cuenta regresiva de subastas
// ============================================================================
// Running: cada tick recalcula días/horas/minutos/segundos desde el target
// (inmutable) y el "ahora" del reloj. Ended: primer tick con diff <= 0,
// cancela su propio intervalo y muestra el mensaje final. No hay vuelta atrás.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::config::CountdownConfig;
use crate::dom::TextSink;
use crate::models::{CountdownState, Remaining, TickOutcome};
use crate::services::{Clock, Scheduler};

/// Máquina de estados pura (sin reloj ni DOM)
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    target_ms: f64,
    state: CountdownState,
}

impl Countdown {
    pub fn new(target_ms: f64) -> Self {
        Self {
            target_ms,
            state: CountdownState::Running,
        }
    }

    pub fn target_ms(&self) -> f64 {
        self.target_ms
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if self.state == CountdownState::Ended {
            return TickOutcome::AlreadyEnded;
        }

        // Con target NaN la comparación es falsa y termina, como una fecha inválida
        let diff = self.target_ms - now_ms;
        if diff > 0.0 {
            TickOutcome::Remaining(Remaining::between(self.target_ms, now_ms))
        } else {
            self.state = CountdownState::Ended;
            TickOutcome::Ended
        }
    }
}

pub struct CountdownViewModel<C, S: Scheduler, D> {
    countdown: RefCell<Countdown>,
    config: CountdownConfig,
    clock: C,
    scheduler: S,
    display: D,
    handle: RefCell<Option<S::Handle>>,
    started: Cell<bool>,
}

impl<C, S, D> CountdownViewModel<C, S, D>
where
    C: Clock + 'static,
    S: Scheduler + 'static,
    D: TextSink + 'static,
{
    pub fn new(target_ms: f64, config: CountdownConfig, clock: C, scheduler: S, display: D) -> Rc<Self> {
        Rc::new(Self {
            countdown: RefCell::new(Countdown::new(target_ms)),
            config,
            clock,
            scheduler,
            display,
            handle: RefCell::new(None),
            started: Cell::new(false),
        })
    }

    pub fn target_ms(&self) -> f64 {
        self.countdown.borrow().target_ms()
    }

    pub fn state(&self) -> CountdownState {
        self.countdown.borrow().state()
    }

    /// Hay un intervalo activo (no cancelado)
    pub fn is_ticking(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Programa el tick repetitivo; solo la primera llamada tiene efecto
    pub fn start(self: &Rc<Self>) -> bool {
        if self.started.replace(true) {
            log::warn!("⚠️ Countdown ya iniciado, ignorando start duplicado");
            return false;
        }

        let weak = Rc::downgrade(self);
        let handle = self.scheduler.every(
            self.config.tick_interval_ms,
            Box::new(move || {
                if let Some(vm) = weak.upgrade() {
                    vm.tick();
                }
            }),
        );
        *self.handle.borrow_mut() = Some(handle);

        log::info!("⏰ Countdown iniciado (tick cada {} ms)", self.config.tick_interval_ms);
        true
    }

    /// Un tick: recalcula y escribe el texto; al terminar cancela el intervalo
    pub fn tick(&self) -> TickOutcome {
        let now = self.clock.now_ms();
        let outcome = self.countdown.borrow_mut().tick(now);

        match &outcome {
            TickOutcome::Remaining(remaining) => {
                self.display.set_text(&remaining.to_string());
            }
            TickOutcome::Ended => {
                let handle = self.handle.borrow_mut().take();
                if let Some(handle) = handle {
                    self.scheduler.cancel(handle);
                }
                self.display.set_text(&self.config.ended_message);
                log::info!("🏁 Countdown terminado");
            }
            TickOutcome::AlreadyEnded => {}
        }

        outcome
    }
}

use std::fmt;

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Estado del countdown: Running -> Ended (sin vuelta atrás)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Ended,
}

/// Tiempo restante mostrado en el countdown-box
///
/// Cada unidad sale de la diferencia de dos cocientes (target/unidad - now/unidad),
/// no de descomponer `target - now`; cerca de los bordes de unidad puede diferir
/// de una descomposición exacta y así se muestra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Ambos instantes en milisegundos epoch
    pub fn between(target_ms: f64, now_ms: f64) -> Self {
        Self {
            days: (target_ms / MS_PER_DAY - now_ms / MS_PER_DAY).floor() as i64,
            hours: ((target_ms / MS_PER_HOUR - now_ms / MS_PER_HOUR) % 24.0).floor() as i64,
            minutes: ((target_ms / MS_PER_MINUTE - now_ms / MS_PER_MINUTE) % 60.0).floor() as i64,
            seconds: ((target_ms / MS_PER_SECOND - now_ms / MS_PER_SECOND) % 60.0).floor() as i64,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Resultado de un tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Sigue corriendo; texto a mostrar
    Remaining(Remaining),
    /// Primer tick con diff <= 0 (o target inválido)
    Ended,
    /// Tick recibido después de terminar; no cambia nada
    AlreadyEnded,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000_000.0;

    #[test]
    fn one_of_each_unit() {
        let remaining = Remaining::between(NOW + 90_061_000.0, NOW);
        assert_eq!(
            remaining,
            Remaining { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
        assert_eq!(remaining.to_string(), "1 days, 1 hours, 1 minutes, 1 seconds");
    }

    #[test]
    fn units_wrap_at_their_modulus() {
        // 2 días, 23 h, 59 min, 59 s
        let diff = 2.0 * MS_PER_DAY + 23.0 * MS_PER_HOUR + 59.0 * MS_PER_MINUTE + 59.0 * MS_PER_SECOND;
        let remaining = Remaining::between(NOW + diff, NOW);
        assert_eq!(remaining.to_string(), "2 days, 23 hours, 59 minutes, 59 seconds");
    }

    #[test]
    fn sub_second_remainder_shows_zero_seconds() {
        let remaining = Remaining::between(NOW + 400.0, NOW);
        assert_eq!(remaining.to_string(), "0 days, 0 hours, 0 minutes, 0 seconds");
    }

    #[test]
    fn days_floor_the_fractional_difference() {
        // 23 h 59 min 59.5 s: todavía 0 días
        let diff = MS_PER_DAY - 500.0;
        let remaining = Remaining::between(NOW + diff, NOW);
        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 23);
    }
}

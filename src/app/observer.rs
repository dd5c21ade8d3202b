//! Nicht-besitzende Registrierung von Positions-Beobachtern.

use std::rc::{Rc, Weak};

/// Empfänger für Wertänderungen des Schiebereglers.
pub trait PositionObserver {
    /// Neuer normierter Wert in [0, 1].
    fn position_changed(&self, value: f32);
}

impl<F: Fn(f32)> PositionObserver for F {
    fn position_changed(&self, value: f32) {
        self(value)
    }
}

/// Handle einer Registrierung, zum späteren Abmelden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Beobachter-Liste mit schwachen Referenzen.
///
/// Der Regler hält seine Beobachter nicht am Leben; fallengelassene
/// Beobachter werden bei der nächsten Benachrichtigung entfernt.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(ObserverId, Weak<dyn PositionObserver>)>,
}

impl ObserverRegistry {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Beobachter an.
    pub fn register<O: PositionObserver + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        let weak: Weak<O> = Rc::downgrade(observer);
        self.entries.push((id, weak as Weak<dyn PositionObserver>));
        id
    }

    /// Meldet einen Beobachter ab. `false`, wenn die Id unbekannt ist.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Benachrichtigt alle lebenden Beobachter in Registrierungsreihenfolge.
    pub fn notify(&mut self, value: f32) {
        self.entries.retain(|(_, weak)| match weak.upgrade() {
            Some(observer) => {
                observer.position_changed(value);
                true
            }
            None => false,
        });
    }

    /// Anzahl registrierter (ggf. schon fallengelassener) Beobachter.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn niemand registriert ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

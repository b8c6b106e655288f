// Disponibilidad del SDK de mapas: monótona, una vez true no vuelve a false

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapReadiness {
    ready: bool,
}

impl MapReadiness {
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Devuelve true si cambió
    pub fn mark_ready(&mut self) -> bool {
        let changed = !self.ready;
        self.ready = true;
        changed
    }
}

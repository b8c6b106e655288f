/// Visibilidad del modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
}

impl ModalState {
    pub fn show(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }
}

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling async work whether its view is still on screen.
///
/// The shell creates one per mounted view and calls [`MountToken::unmount`]
/// before replacing it.
#[derive(Debug, Clone)]
pub struct MountToken {
    mounted: Rc<Cell<bool>>,
}

impl MountToken {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

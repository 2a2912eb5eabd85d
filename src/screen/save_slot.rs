use std::{cell::RefCell, rc::Rc};

use crate::store::ProductDispatch;

use super::{
    controller::{SubmitController, SubmitOutcome},
    navigation::Navigator,
};

#[derive(Debug, Default)]
struct SlotState {
    controller: Option<SubmitController>,
    revision: u64,
}

/// Shared holder for the most recent submit controller.
///
/// The screen rebinds it whenever the controller's inputs change; the header's
/// Save item keeps a clone and always invokes whatever is bound at press time.
#[derive(Debug, Clone, Default)]
pub struct SaveSlot {
    inner: Rc<RefCell<SlotState>>,
}

impl SaveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, controller: SubmitController) {
        let mut slot = self.inner.borrow_mut();
        slot.controller = Some(controller);
        slot.revision += 1;
        tracing::trace!(revision = slot.revision, "save handler rebound");
    }

    pub fn clear(&self) {
        let mut slot = self.inner.borrow_mut();
        slot.controller = None;
        slot.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    pub fn current(&self) -> Option<SubmitController> {
        self.inner.borrow().controller.clone()
    }

    pub fn is_bound(&self) -> bool {
        self.inner.borrow().controller.is_some()
    }

    /// Runs the bound controller. `None` when nothing is bound yet.
    pub fn invoke(
        &self,
        store: &mut dyn ProductDispatch,
        navigator: &mut dyn Navigator,
    ) -> Option<SubmitOutcome> {
        let controller = self.current()?;
        Some(controller.submit(store, navigator))
    }
}

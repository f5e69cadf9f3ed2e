//! Ordered module storage
//!
//! Index order is physical order: module 0 is the leftmost segment of the
//! run. The store holds at least one module from construction onward, so
//! the rest of the app never has to handle an empty cabinet.

use super::{CabinetError, CabinetModule};

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStore {
    modules: Vec<CabinetModule>,
}

impl ModuleStore {
    /// Create a store holding a single initial module.
    pub fn new(initial: CabinetModule) -> Self {
        Self {
            modules: vec![initial],
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Append a module at the right end. Returns the new length.
    pub fn append(&mut self, module: CabinetModule) -> usize {
        self.modules.push(module);
        self.modules.len()
    }

    /// Remove and return the rightmost module.
    ///
    /// The store never shrinks below one module; asking it to is an error,
    /// and the caller decides whether that is worth telling the user about.
    pub fn remove_last(&mut self) -> Result<CabinetModule, CabinetError> {
        if self.modules.len() > 1 {
            self.modules.pop().ok_or(CabinetError::EmptyStore)
        } else {
            Err(CabinetError::EmptyStore)
        }
    }

    pub fn get(&self, index: usize) -> Result<&CabinetModule, CabinetError> {
        let len = self.modules.len();
        self.modules
            .get(index)
            .ok_or(CabinetError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut CabinetModule, CabinetError> {
        let len = self.modules.len();
        self.modules
            .get_mut(index)
            .ok_or(CabinetError::IndexOutOfRange { index, len })
    }

    /// Replace the module at `index`.
    #[allow(dead_code)]
    pub fn set(&mut self, index: usize, module: CabinetModule) -> Result<(), CabinetError> {
        *self.get_mut(index)? = module;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CabinetModule> {
        self.modules.iter()
    }

    /// Mutable iteration for layout passes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CabinetModule> {
        self.modules.iter_mut()
    }

    /// Sum of all module widths in cm (the user-facing total width).
    pub fn total_width(&self) -> f32 {
        self.modules.iter().map(|m| m.width).sum()
    }
}

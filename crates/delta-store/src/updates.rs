//! Partial-update structs for mutable entities.
//!
//! `None` leaves a field untouched; `Some(value)` replaces it. Optional
//! entity fields use `Option<Option<T>>` so a caller can clear them.

use delta_core::enums::{CoreElective, Semester};

#[derive(Debug, Clone, Default)]
pub struct ProgrammeUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub school: Option<Option<String>>,
    pub faculty: Option<Option<String>>,
    pub discipline_area: Option<Option<String>>,
    pub nfq_level: Option<Option<String>>,
    pub mode: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct ModuleUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub credits: Option<Option<u32>>,
}

#[derive(Debug, Clone, Default)]
pub struct ProgrammeModuleUpdate {
    pub stage: Option<Option<u8>>,
    pub semester: Option<Option<Semester>>,
    pub is_core: Option<Option<CoreElective>>,
}

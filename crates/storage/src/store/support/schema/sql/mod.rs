#![forbid(unsafe_code)]

pub(in crate::store) mod garden_activities;
pub(in crate::store) mod gardens;
pub(in crate::store) mod harvests;
pub(in crate::store) mod legacy;
pub(in crate::store) mod plant_journals;
pub(in crate::store) mod plant_types;
pub(in crate::store) mod plants;

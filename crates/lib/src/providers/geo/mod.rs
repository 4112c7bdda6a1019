pub mod nominatim;

use crate::types::{Language, LocationName};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A reverse-geocoding service.
///
/// Lookups never fail from the caller's point of view: any error collapses
/// into `LocationName::Unknown` for the requested language.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug + DynClone {
    async fn reverse(&self, latitude: f64, longitude: f64, language: Language) -> LocationName;
}

dyn_clone::clone_trait_object!(Geocoder);

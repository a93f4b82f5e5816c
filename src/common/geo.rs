// src/common/geo.rs

use thiserror::Error;

/// Raio médio da Terra em metros.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude fora do intervalo [-90, 90]: {0}")]
    InvalidLatitude(f64),
    #[error("longitude fora do intervalo [-180, 180]: {0}")]
    InvalidLongitude(f64),
}

/// Um par (latitude, longitude) em graus decimais, já validado.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Rejeita NaN, infinitos e valores fora do intervalo.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        // `contains` é falso para NaN, então ele não passa daqui
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self, other)
    }
}

/// Distância de grande círculo (fórmula de haversine), em metros.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

// src/services/attendance_service.rs

use uuid::Uuid;

use crate::{
    common::{error::AppError, geo::GeoPoint},
    db::{AttendanceRepository, StadiumRepository},
    models::attendance::{AttendanceFilter, AttendanceRecord, AttendanceType},
};

/// Raio padrão do fichaje, em metros.
pub const DEFAULT_CHECKIN_RADIUS_METERS: f64 = 100.0;

// Regra do geofence: aceita se a distância até o predio for <= raio
#[derive(Debug, Clone, Copy)]
pub struct GeofencePolicy {
    radius_meters: f64,
}

impl GeofencePolicy {
    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    /// Devolve a distância calculada, ou `OutOfRange` com ela.
    pub fn evaluate(&self, stadium: &GeoPoint, attempt: &GeoPoint) -> Result<f64, AppError> {
        let distance = stadium.distance_to(attempt);
        if distance <= self.radius_meters {
            Ok(distance)
        } else {
            Err(AppError::OutOfRange {
                distance,
                max_distance: self.radius_meters,
            })
        }
    }
}

impl Default for GeofencePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKIN_RADIUS_METERS)
    }
}

// O QR do predio carrega apenas o id; qualquer outra coisa não corresponde a nenhum predio
pub fn parse_stadium_code(code: &str) -> Option<Uuid> {
    Uuid::parse_str(code.trim()).ok()
}

#[derive(Clone)]
pub struct AttendanceService {
    stadium_repo: StadiumRepository,
    attendance_repo: AttendanceRepository,
    policy: GeofencePolicy,
}

impl AttendanceService {
    pub fn new(
        stadium_repo: StadiumRepository,
        attendance_repo: AttendanceRepository,
        policy: GeofencePolicy,
    ) -> Self {
        Self { stadium_repo, attendance_repo, policy }
    }

    /// Fichaje por QR: predio inexistente → 404, fora do raio → 403 com a distância.
    /// Não há proteção contra fichajes repetidos.
    pub async fn record(
        &self,
        user_id: Uuid,
        code: &str,
        record_type: AttendanceType,
        latitude: f64,
        longitude: f64,
    ) -> Result<AttendanceRecord, AppError> {
        let attempt = GeoPoint::new(latitude, longitude)?;

        let stadium_id = parse_stadium_code(code).ok_or(AppError::StadiumNotFound)?;
        let stadium = self
            .stadium_repo
            .get(stadium_id)
            .await?
            .ok_or(AppError::StadiumNotFound)?;

        let distance = self
            .policy
            .evaluate(&stadium.location()?, &attempt)
            .map_err(|err| {
                if let AppError::OutOfRange { distance, .. } = &err {
                    tracing::warn!(
                        "📍 Fichaje negado: usuário {} a {:.1} m do predio {}",
                        user_id, distance, stadium.id
                    );
                }
                err
            })?;

        let record = self
            .attendance_repo
            .insert(user_id, stadium.id, record_type, attempt, distance)
            .await?;

        tracing::info!(
            "✅ Fichaje {:?} do usuário {} no predio {} ({:.1} m)",
            record_type, user_id, stadium.id, distance
        );
        Ok(record)
    }

    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, AppError> {
        self.attendance_repo.list(filter).await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<AttendanceRecord>, AppError> {
        let filter = AttendanceFilter {
            user_id: Some(user_id),
            ..Default::default()
        };
        self.attendance_repo.list(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn check_in_at_stadium_coordinates_is_accepted() {
        let stadium = point(-34.6692, -58.3650);
        let distance = GeofencePolicy::default().evaluate(&stadium, &stadium).unwrap();
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn check_in_about_58_meters_away_is_accepted() {
        let stadium = point(-34.6692, -58.3650);
        let distance = GeofencePolicy::default()
            .evaluate(&stadium, &point(-34.6696, -58.3654))
            .unwrap();
        assert!((distance - 57.59).abs() < 0.05, "got {distance}");
    }

    #[test]
    fn check_in_beyond_radius_reports_distance() {
        let stadium = point(-34.6692, -58.3650);
        let attempt = point(-34.6700, -58.3660);

        match GeofencePolicy::default().evaluate(&stadium, &attempt) {
            Err(AppError::OutOfRange { distance, max_distance }) => {
                assert!((distance - 127.58).abs() < 0.05, "got {distance}");
                assert_eq!(max_distance, 100.0);
            }
            other => panic!("esperava OutOfRange, veio {other:?}"),
        }
    }

    #[test]
    fn radius_is_inclusive_and_configurable() {
        let stadium = point(-34.6692, -58.3650);
        let attempt = point(-34.6700, -58.3660);
        let exact = stadium.distance_to(&attempt);

        assert!(GeofencePolicy::new(exact).evaluate(&stadium, &attempt).is_ok());
        assert!(GeofencePolicy::new(150.0).evaluate(&stadium, &attempt).is_ok());
        assert!(GeofencePolicy::new(exact - 0.001).evaluate(&stadium, &attempt).is_err());
    }

    #[test]
    fn stadium_code_must_be_a_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_stadium_code(&id.to_string()), Some(id));
        assert_eq!(parse_stadium_code(&format!("  {id}\n")), Some(id));
        assert_eq!(parse_stadium_code("PREDIO-DOCK-SUD"), None);
        assert_eq!(parse_stadium_code(""), None);
    }
}

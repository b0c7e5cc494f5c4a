//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_patient() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::patient();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "PATIENT");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::patient();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email but different CPF
    request.cpf = RegisterRequest::patient().cpf;
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_doctor_requires_crm() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::doctor("Cardiology");
    request.crm = None;

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CRM_REQUIRED");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::patient();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::patient();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Get current user
    let response = server
        .get_auth("/api/users/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, register_req.email);
    assert!(user.active);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_user_cannot_read_other_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let first: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let second: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/users/{}", first.user.id),
            &second.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Doctor Directory Tests
// ============================================================================

#[tokio::test]
async fn test_public_doctor_directory() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register a doctor
    let register_req = RegisterRequest::doctor("Dermatology");
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Directory is public, no token needed
    let response = server.get("/api/doctors/public").await.unwrap();
    let doctors: Vec<DoctorResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(doctors.iter().any(|d| d.id == auth.user.id));
}

#[tokio::test]
async fn test_doctor_directory_specialty_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::doctor("Pediatrics");
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Case-insensitive substring match
    let response = server
        .get("/api/doctors/public/specialty/pediatr")
        .await
        .unwrap();
    let doctors: Vec<DoctorResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(doctors.iter().any(|d| d.id == auth.user.id));
}

// ============================================================================
// Plan Tests
// ============================================================================

#[tokio::test]
async fn test_public_plans() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Public catalog needs no token
    let response = server.get("/api/plans/public").await.unwrap();
    let plans: Vec<PlanResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Only active plans are listed
    assert!(plans.iter().all(|p| p.active));
}

#[tokio::test]
async fn test_create_plan_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/plans", &auth.access_token, &CreatePlanRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Appointment Tests
// ============================================================================

/// Register a doctor and a patient, returning their auth responses
async fn setup_doctor_and_patient(server: &TestServer) -> (AuthResponse, AuthResponse) {
    let response = server
        .post("/api/auth/register", &RegisterRequest::doctor("Cardiology"))
        .await
        .unwrap();
    let doctor: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let patient: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (doctor, patient)
}

#[tokio::test]
async fn test_book_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(appointment.patient_id, patient.user.id);
    assert_eq!(appointment.doctor_id, doctor.user.id);
    assert_eq!(appointment.status, "SCHEDULED");
    assert!(!appointment.video_room_id.is_empty());
}

#[tokio::test]
async fn test_book_appointment_in_past() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let mut request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    request.scheduled_at = Utc::now() - Duration::hours(1);

    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "SCHEDULE_IN_PAST");
}

#[tokio::test]
async fn test_double_booking_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Another patient wants the same slot with the same doctor
    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let other: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/appointments", &other.access_token, &request)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "TIME_SLOT_TAKEN");
}

#[tokio::test]
async fn test_cancel_frees_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Cancel
    let response = server
        .patch_auth(
            &format!("/api/appointments/{}/cancel", appointment.id),
            &patient.access_token,
        )
        .await
        .unwrap();
    let cancelled: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "CANCELLED");

    // The slot is free again
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_doctor_confirms_appointment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/appointments/{}/confirm", appointment.id),
            &doctor.access_token,
        )
        .await
        .unwrap();
    let confirmed: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirmed.status, "CONFIRMED");
}

#[tokio::test]
async fn test_patient_cannot_confirm() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/appointments/{}/confirm", appointment.id),
            &patient.access_token,
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_ASSIGNED_DOCTOR");
}

#[tokio::test]
async fn test_doctor_records_consultation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Start the consultation
    let update = UpdateAppointmentRequest {
        status: Some("IN_PROGRESS".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/appointments/{}", appointment.id),
            &doctor.access_token,
            &update,
        )
        .await
        .unwrap();
    let started: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(started.status, "IN_PROGRESS");
    assert!(started.started_at.is_some());

    // Finish it with a diagnosis
    let update = UpdateAppointmentRequest {
        status: Some("COMPLETED".to_string()),
        diagnosis: Some("Tension headache".to_string()),
        prescription: Some("Rest and hydration".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/appointments/{}", appointment.id),
            &doctor.access_token,
            &update,
        )
        .await
        .unwrap();
    let completed: AppointmentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(completed.status, "COMPLETED");
    assert!(completed.ended_at.is_some());
    assert!(completed.duration_minutes.is_some());
    assert_eq!(completed.diagnosis.as_deref(), Some("Tension headache"));
}

#[tokio::test]
async fn test_patient_cannot_set_status_besides_cancel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateAppointmentRequest {
        status: Some("COMPLETED".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/appointments/{}", appointment.id),
            &patient.access_token,
            &update,
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "PATIENTS_MAY_ONLY_CANCEL");
}

#[tokio::test]
async fn test_appointment_access_denied_for_stranger() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::patient())
        .await
        .unwrap();
    let stranger: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/appointments/{}", appointment.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_my_appointments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Patient side
    let response = server
        .get_auth("/api/appointments", &patient.access_token)
        .await
        .unwrap();
    let mine: Vec<AppointmentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|a| a.id == appointment.id));

    // Doctor side sees the same booking
    let response = server
        .get_auth("/api/appointments", &doctor.access_token)
        .await
        .unwrap();
    let theirs: Vec<AppointmentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(theirs.iter().any(|a| a.id == appointment.id));
}

#[tokio::test]
async fn test_list_appointments_by_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doctor, patient) = setup_doctor_and_patient(&server).await;

    let request = CreateAppointmentRequest::with_doctor(doctor.user.id);
    let response = server
        .post_auth("/api/appointments", &patient.access_token, &request)
        .await
        .unwrap();
    let appointment: AppointmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/appointments/status/SCHEDULED", &patient.access_token)
        .await
        .unwrap();
    let scheduled: Vec<AppointmentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(scheduled.iter().any(|a| a.id == appointment.id));

    // Unknown status is rejected
    let response = server
        .get_auth("/api/appointments/status/BOGUS", &patient.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

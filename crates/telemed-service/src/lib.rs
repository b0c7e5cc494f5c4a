//! # telemed-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AppointmentResponse, AuthResponse, CreateAppointmentRequest, CreatePlanRequest,
    DateRangeQuery, DoctorResponse, HealthResponse, LoginRequest, PlanResponse,
    ReadinessResponse, RegisterRequest, UpdateAppointmentRequest, UpdatePlanRequest,
    UpdateUserRequest, UserResponse,
};
pub use services::{
    AppointmentService, AuthService, PlanService, ServiceContext, ServiceError, ServiceResult,
    UserService,
};

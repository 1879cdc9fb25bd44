//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use campus_auth::jwt::{JwtDecoder, JwtEncoder};
use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_auth::rbac::RbacEnforcer;
use campus_core::config::AppConfig;
use campus_database::DatabasePool;
use campus_database::repositories::{
    AnalysisRepository, CourseRepository, DepartmentRepository, EnrollmentRepository,
    InstructorRepository, UserRepository,
};
use campus_service::{
    AccountProvisioner, AccountService, AnalysisService, CourseService, DepartmentService,
    EnrollmentService, InstructorService, StudentService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and profile
    pub account_service: Arc<AccountService>,
    /// Department service
    pub department_service: Arc<DepartmentService>,
    /// Course service
    pub course_service: Arc<CourseService>,
    /// Instructor service
    pub instructor_service: Arc<InstructorService>,
    /// Student service
    pub student_service: Arc<StudentService>,
    /// Enrollment service
    pub enrollment_service: Arc<EnrollmentService>,
    /// Dashboard aggregates
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Wires repositories, auth components and services over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let department_repo = Arc::new(DepartmentRepository::new(pool.clone()));
        let course_repo = Arc::new(CourseRepository::new(pool.clone()));
        let instructor_repo = Arc::new(InstructorRepository::new(pool.clone()));
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let enrollment_repo = Arc::new(EnrollmentRepository::new(pool.clone()));
        let analysis_repo = Arc::new(AnalysisRepository::new(pool));

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let rbac = Arc::new(RbacEnforcer::new());

        let account_provisioner = Arc::new(AccountProvisioner::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
        ));
        let account_service = Arc::new(AccountService::new(
            account_provisioner,
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            jwt_encoder,
        ));
        let department_service = Arc::new(DepartmentService::new(department_repo, Arc::clone(&rbac)));
        let course_service = Arc::new(CourseService::new(course_repo, Arc::clone(&rbac)));
        let instructor_service =
            Arc::new(InstructorService::new(instructor_repo, Arc::clone(&rbac)));
        let student_service = Arc::new(StudentService::new(
            Arc::clone(&user_repo),
            password_hasher,
            password_validator,
            Arc::clone(&rbac),
        ));
        let enrollment_service = Arc::new(EnrollmentService::new(
            enrollment_repo,
            user_repo,
            Arc::clone(&rbac),
        ));
        let analysis_service = Arc::new(AnalysisService::new(analysis_repo, rbac));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            account_service,
            department_service,
            course_service,
            instructor_service,
            student_service,
            enrollment_service,
            analysis_service,
        }
    }
}

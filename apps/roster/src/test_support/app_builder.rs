//! Given an AppState, build an initialized Actix test service.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, App, Error as ActixError};

use crate::middleware::request_trace::RequestTrace;
use crate::middleware::structured_logger::StructuredLogger;
use crate::state::app_state::AppState;

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    /// Build the service with the production routes and middleware stack.
    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .configure(crate::routes::configure);

        actix_web::test::init_service(app).await
    }
}

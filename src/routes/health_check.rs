use actix_web::HttpResponse;

/// Returns a 200 with no body, enough for load balancers and orchestrators to know we are alive.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
